//! Block table for the case-study report.

use std::path::Path;

use crate::types::ReportBlock;

/// Facts quoted throughout the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFacts {
    /// Repository name.
    pub project: &'static str,
    /// Build that produced the reported results.
    pub build_num: &'static str,
    /// Stage success summary.
    pub success_rate: &'static str,
    /// Where the deployed app is reachable.
    pub url: &'static str,
    /// Docker image ID.
    pub image_id: &'static str,
    /// Docker container name.
    pub container_name: &'static str,
    /// Docker container ID.
    pub container_id: &'static str,
}

impl Default for ProjectFacts {
    fn default() -> Self {
        Self {
            project: "simple-webapp-jenkins-ci-cd",
            build_num: "#10",
            success_rate: "100% (4/4 stages)",
            url: "http://localhost:8090",
            image_id: "e54b76dbdf5f",
            container_name: "simple-webapp-demo",
            container_id: "1db05a33b511",
        }
    }
}

/// Report screenshots: file name inside the screenshots directory and caption.
const REPORT_SCREENSHOTS: [(&str, &str); 3] = [
    ("jenkins_build.png", "Jenkins Build #10 — All stages green"),
    ("docker_ps.png", "Docker container simple-webapp-demo (8090→80)"),
    ("app_browser.png", "App at http://localhost:8090 with JS alert"),
];

/// The full report, in document order.
pub fn report(facts: &ProjectFacts, author: &str, date: &str, screenshots: &Path) -> Vec<ReportBlock> {
    let mut blocks = vec![
        ReportBlock::Title {
            title: "DevOps Case Study Report".to_string(),
            subtitle: format!(
                "Project: {}  |  Author: {author}  |  Date: {date}",
                facts.project
            ),
        },
        ReportBlock::PageBreak,
        ReportBlock::h1("Executive Summary"),
        ReportBlock::paragraph(format!(
            "This report presents a complete CI/CD pipeline for a static web application using Jenkins. \
             The pipeline automates checkout, validation, testing, and Docker-based deployment. The final build \
             ({}) achieved {} success and deployed a containerized app accessible at {}.",
            facts.build_num, facts.success_rate, facts.url
        )),
        ReportBlock::h1("Problem Statement & Objectives"),
        ReportBlock::paragraph(
            "Create a CI/CD pipeline for a static HTML/CSS/JS website using Jenkins and implement automated \
             deployment. Objectives included ensuring reproducible builds, minimal manual steps, and clear pipeline visibility.",
        ),
        ReportBlock::h2("Objectives"),
        ReportBlock::bullets([
            "Automate Checkout → Build → Test → Deploy",
            "Validate required files before deployment",
            "Use Docker/Nginx for reproducible deployment",
            "Document results and lessons learned",
        ]),
        ReportBlock::h1("Scope"),
        ReportBlock::bullets([
            "Static website: index.html, styles.css, script.js",
            "Jenkins declarative pipeline (4 stages + post)",
            "Dockerfile for Nginx-based container",
            "Optional docker-compose for local Jenkins + webapp",
        ]),
        ReportBlock::h1("Environment & Architecture"),
        ReportBlock::paragraph(
            "Windows host with WSL2 Ubuntu as the Jenkins agent. Docker used for building and running the containerized web app. \
             Architecture flow: Developer (GitHub) → Jenkins Pipeline → Docker Image → Nginx Container → Browser.",
        ),
        ReportBlock::h1("Technologies Used"),
        ReportBlock::bullets([
            "HTML5, CSS3, JavaScript",
            "Nginx (nginx:alpine)",
            "Docker",
            "Jenkins (Declarative Pipeline)",
            "Git/GitHub",
        ]),
        ReportBlock::h1("Tools Used"),
        ReportBlock::bullets([
            "Jenkins 2.528.2",
            "Docker 28.2.2",
            "Git 2.43.0",
            "Windows + WSL2 (Ubuntu 24.04)",
            "VS Code",
        ]),
        ReportBlock::h1("Methodology / Implementation Steps"),
        ReportBlock::bullets([
            "Create app files and Dockerfile; initialize Git repo",
            "Configure Jenkins (Pipeline from SCM; set script path)",
            "Make scripts executable; add Jenkins to docker group; restart Jenkins",
            "Run validate.sh in Build & Test stages",
            "Build Docker image and run container on port 8090",
            "Post-deploy verification and logging",
        ]),
        ReportBlock::h1("Jenkins Pipeline"),
        ReportBlock::bullets([
            "Stages: Checkout, Build (validate), Test (validate), Deploy (docker)",
            "Environment: DEPLOY_METHOD=docker; CONTAINER_NAME=simple-webapp-demo; WEBAPP_PORT=8090",
            "Nested repo path handled with dir() blocks",
        ]),
        ReportBlock::h1("Deployment"),
        ReportBlock::bullets([
            format!("Image: simple-webapp:latest (Image ID: {})", facts.image_id),
            format!("Container: {} (ID: {})", facts.container_name, facts.container_id),
            format!("Port mapping: 8090 → 80; URL: {}", facts.url),
            "Automated stop/remove old container before redeploy".to_string(),
        ]),
        ReportBlock::h1("Results & Metrics"),
        ReportBlock::bullets([
            format!("Build {}: SUCCESS (4/4 stages)", facts.build_num),
            "Total runtime ~15 seconds".to_string(),
            "Application functional; JS alert verified".to_string(),
        ]),
        ReportBlock::h1("Screenshots"),
    ];

    blocks.extend(REPORT_SCREENSHOTS.iter().map(|(file, caption)| ReportBlock::Picture {
        path: screenshots.join(file),
        caption: (*caption).to_string(),
    }));

    blocks.extend([
        ReportBlock::h1("Challenges & Resolutions"),
        ReportBlock::bullets([
            "Jenkinsfile path + nested repo → set Script Path + dir()",
            "Script permissions on Linux → git chmod + pipeline chmod",
            "Docker permission denied → add Jenkins to docker group + restart",
            "Image pull timeout → pre-cache nginx:alpine",
            "Deploy method → switched from sudo copy to Docker",
        ]),
        ReportBlock::h1("Lessons Learned"),
        ReportBlock::bullets([
            "Docker simplifies CI/CD deployments",
            "Repo structure impacts Jenkins configuration",
            "Windows→Linux scripts need executable flags",
            "Group membership changes require service restart",
        ]),
        ReportBlock::h1("Conclusion"),
        ReportBlock::paragraph(format!(
            "The CI/CD pipeline met all objectives, delivering {} success with a reproducible Docker-based deployment. \
             The project is production-ready and demonstrates a clear, maintainable Jenkins workflow for static sites.",
            facts.success_rate
        )),
        ReportBlock::h1("References"),
        ReportBlock::bullets([
            "Repo: https://github.com/Punith968/simple-webapp-jenkins-ci-cd",
            "Jenkins Docs: https://www.jenkins.io/doc/",
            "Docker Docs: https://docs.docker.com/",
        ]),
        ReportBlock::h1("Appendix — Key Commands"),
        ReportBlock::paragraph("docker build -t simple-webapp:latest ."),
        ReportBlock::paragraph("docker run -d --name simple-webapp-demo -p 8090:80 simple-webapp:latest"),
        ReportBlock::paragraph("./validate.sh"),
    ]);

    blocks
}
