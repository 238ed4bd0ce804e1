#![allow(dead_code)]

pub mod mock_service;

use std::path::Path;

use svcprobe_config::Config;
use svcprobe_core::{Prober, Report};
use svcprobe_suites::{Suite, SuiteSummary};
use url::Url;

/// Default config with the scratch file redirected into `dir`
pub fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.fixture.path = dir.join("test_document.txt");
    config
}

/// URL on a local port nothing is listening on
pub fn closed_port_url(path: &str) -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}{path}")).unwrap()
}

/// Run one suite and return its summary with everything it printed
pub async fn run_suite(suite: Suite, config: &Config) -> (SuiteSummary, String) {
    let prober = Prober::new().unwrap();
    let mut report = Report::new(Vec::new());
    let summary = suite.run(&prober, config, &mut report).await.unwrap();
    (summary, String::from_utf8(report.into_inner()).unwrap())
}

/// Printed lines describing the requests (method, URL, headers, body shape)
pub fn request_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with("Request:") || line.starts_with("Request "))
        .collect()
}
