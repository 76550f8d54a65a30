//! Relative API routes, joined onto the service root URL.

pub fn add_run(project_id: u64) -> String {
    format!("index.php?/api/v2/add_run/{project_id}")
}

pub fn get_tests(run_id: u64) -> String {
    format!("index.php?/api/v2/get_tests/{run_id}")
}

pub fn add_results_for_cases(run_id: u64) -> String {
    format!("index.php?/api/v2/add_results_for_cases/{run_id}")
}
