//! Placeholder screenshot captions.

/// File name and caption of every placeholder screenshot.
pub const SCREENSHOTS: [(&str, &str); 3] = [
    (
        "jenkins_build.png",
        "Jenkins Build #10 — 4/4 Stages SUCCESS\nReplace with real screenshot",
    ),
    (
        "docker_ps.png",
        "Docker ps — simple-webapp-demo 8090→80\nReplace with real screenshot",
    ),
    (
        "app_browser.png",
        "App in Browser — http://localhost:8090\nReplace with real screenshot",
    ),
];
