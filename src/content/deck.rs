//! Slide tables for the full and the short deck.

use std::path::Path;

use crate::types::SlideSpec;

/// The 16-slide case-study deck.
pub fn deck_full() -> Vec<SlideSpec> {
    vec![
        SlideSpec::title(
            "Jenkins CI/CD for a Static Web App — Case Study",
            "End-to-end CI/CD with Docker deployment | Punith C | Nov 13, 2025",
        ),
        SlideSpec::bullets(
            "Executive Summary",
            [
                "Goal: Automate build → test → deploy for a static site",
                "Pipeline: Checkout, Build, Test, Deploy (4/4 green)",
                "Deployment: Docker (nginx) on port 8090",
                "Result: 100% success; ~15s from commit to running app",
            ],
        )
        .with_notes("Production-ready automation with post-deploy verification."),
        SlideSpec::bullets(
            "Problem Statement & Objectives",
            [
                "Build a CI/CD pipeline for a static website (HTML/CSS/JS)",
                "Automated validation and reliable deployment",
                "Use Jenkins Declarative Pipeline",
                "Prefer Docker for reproducibility",
            ],
        ),
        SlideSpec::bullets(
            "Architecture Overview",
            [
                "Flow: Developer (GitHub) → Jenkins → Docker Image → Nginx Container → Browser",
                "Environment: Windows host + WSL2 Ubuntu agent",
                "Base image: nginx:alpine",
            ],
        )
        .with_notes("Add a diagram later with boxes and arrows."),
        SlideSpec::bullets(
            "Technologies Used",
            [
                "HTML5, CSS3, JavaScript",
                "Nginx (nginx:alpine)",
                "Docker",
                "Jenkins (Declarative)",
                "Git/GitHub",
            ],
        ),
        SlideSpec::bullets(
            "Tools & Environment",
            [
                "Jenkins 2.528.2, Docker 28.2.2, Git 2.43.0",
                "Windows + WSL2 (Ubuntu 24.04)",
                "VS Code; PowerShell + bash",
                "Optional: docker-compose",
            ],
        )
        .with_notes("Jenkins user added to docker group; restarted service."),
        SlideSpec::bullets(
            "Repository & Files",
            [
                "App: index.html, styles.css, script.js",
                "Pipeline: Jenkinsfile (Declarative)",
                "Container: Dockerfile, docker-compose.yml",
                "Scripts: validate.sh, deploy.sh (alt method)",
                "Docs: README, CASE-STUDY-SUMMARY, DEPLOYMENT-GUIDE",
            ],
        ),
        SlideSpec::bullets(
            "Pipeline Design (Stages)",
            [
                "Checkout → Build (validate.sh) → Test (validate.sh) → Deploy (docker build/run)",
                "Env: DEPLOY_METHOD=docker, CONTAINER_NAME=simple-webapp-demo, WEBAPP_PORT=8090",
                "dir() wrappers handle nested repo path",
            ],
        ),
        SlideSpec::bullets(
            "Implementation Steps",
            [
                "Setup repo, scripts; push to GitHub",
                "Configure Jenkins (Pipeline from SCM; correct script path)",
                "chmod +x scripts; ensure Docker access for Jenkins",
                "Pre-pull nginx:alpine to avoid timeouts",
            ],
        ),
        SlideSpec::bullets(
            "Deployment Approach (Docker)",
            [
                "Build image: simple-webapp:latest",
                "Container: simple-webapp-demo (8090→80)",
                "Stop/remove old container automatically",
                "Post actions verify container health and URL",
            ],
        ),
        SlideSpec::bullets(
            "Results & Metrics",
            [
                "Build #10: SUCCESS (4/4 stages), ~15s total",
                "Image ID: e54b76dbdf5f; Container ID: 1db05a33b511",
                "URL: http://localhost:8090",
                "JS alert verified: ‘Hello from the Simple WebApp Jenkins CI/CD demo!’",
            ],
        ),
        SlideSpec::bullets(
            "Challenges & Resolutions",
            [
                "Jenkinsfile path in nested dir → set Script Path + use dir()",
                "Script permissions → git chmod + pipeline chmod",
                "Docker permission denied → add Jenkins to docker group + restart",
                "Image pull timeout → pre-cache nginx:alpine",
                "Deploy method → switched from sudo copy to Docker",
            ],
        ),
        SlideSpec::bullets(
            "Lessons Learned",
            [
                "Docker simplifies deployments in CI/CD",
                "Repo structure impacts Jenkins configuration",
                "Windows→Linux: scripts need executable bits",
                "Group membership changes require service restart",
            ],
        ),
        SlideSpec::bullets(
            "Next Steps (Enhancements)",
            [
                "UI tests with Playwright/Puppeteer",
                "Push images to registry; tag by build number",
                "Blue/green or canary deployments",
                "Webhook triggers; Slack/Email notifications",
            ],
        ),
        SlideSpec::picture(
            "Screenshots (Replace placeholders)",
            None,
            "1) Jenkins build #10 (4/4 green)  |  2) docker ps (8090→80)  |  3) Browser at http://localhost:8090",
        ),
        SlideSpec::bullets(
            "Thank You",
            [
                "Repo: https://github.com/Punith968/simple-webapp-jenkins-ci-cd",
                "Questions welcome",
            ],
        ),
    ]
}

/// The 9-slide short deck. The Jenkins build slide (7th) embeds
/// `jenkins_build.png` from `screenshots` when it exists.
pub fn deck_short(screenshots: &Path) -> Vec<SlideSpec> {
    vec![
        SlideSpec::title("Jenkins CI/CD — Static Web App", "Short Deck | Punith C | Nov 13, 2025")
            .with_notes("Quick overview: goals, pipeline, results."),
        SlideSpec::bullets(
            "Summary",
            [
                "Goal: CI/CD for static site",
                "Pipeline: Checkout, Build, Test, Deploy",
                "Deployment: Docker (nginx) on 8090",
                "Result: 100% success; ~15s",
            ],
        )
        .with_notes("Emphasize production-ready demo."),
        SlideSpec::bullets(
            "Architecture",
            [
                "GitHub → Jenkins → Docker Image → Nginx Container → Browser",
                "Windows host; WSL2 agent",
                "Base: nginx:alpine",
            ],
        )
        .with_notes("Keep it high-level."),
        SlideSpec::bullets(
            "Pipeline (Declarative)",
            [
                "Checkout → Build (validate.sh) → Test (validate.sh) → Deploy (docker)",
                "Env: DEPLOY_METHOD=docker; PORT=8090",
            ],
        )
        .with_notes("Call out dir() usage for nested path."),
        SlideSpec::bullets(
            "Implementation & Deployment",
            [
                "Make scripts executable; configure Jenkins",
                "Add Jenkins to docker group; restart",
                "Pre-pull nginx:alpine",
                "Image: simple-webapp:latest",
                "Container: simple-webapp-demo (8090→80)",
                "Auto-stop old container on redeploy",
            ],
        )
        .with_notes("Key setup steps to avoid failures. Why Docker over sudo copy."),
        SlideSpec::bullets(
            "Results",
            [
                "Build #10: SUCCESS (4/4)",
                "~15s total runtime",
                "URL: http://localhost:8090",
                "JS alert verified",
            ],
        )
        .with_notes("Show concrete proof."),
        SlideSpec::picture(
            "Jenkins Build",
            Some(screenshots.join("jenkins_build.png")),
            "Add Jenkins 4/4 green screenshot",
        )
        .with_notes("Replace with actual screenshot."),
        SlideSpec::bullets(
            "Lessons & Next",
            [
                "Docker simplifies CI/CD",
                "Repo structure matters (dir(), script path)",
                "Next: UI tests, registry, blue/green",
            ],
        )
        .with_notes("Close with what’s next."),
        SlideSpec::bullets(
            "Thank You",
            ["Repo: github.com/Punith968/simple-webapp-jenkins-ci-cd", "Questions welcome"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::SlideBody;

    #[test]
    fn full_deck_has_sixteen_slides() {
        let slides = deck_full();
        assert_eq!(slides.len(), 16);
        assert_eq!(slides[0].body.kind(), "title");
        assert_eq!(slides[14].body.kind(), "picture");
        assert_eq!(slides[15].title, "Thank You");
    }

    #[test]
    fn short_deck_points_jenkins_slide_at_screenshots() {
        let slides = deck_short(Path::new("shots"));
        assert_eq!(slides.len(), 9);
        match &slides[6].body {
            SlideBody::Picture { image, caption } => {
                assert_eq!(image.as_deref(), Some(Path::new("shots/jenkins_build.png")));
                assert_eq!(caption, "Add Jenkins 4/4 green screenshot");
            }
            other => panic!("Expected picture slide, got {other:?}"),
        }
    }
}
