#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod shell_navigation_tests;

#[cfg(test)]
mod monitoring_filter_tests;

#[cfg(test)]
mod session_serde_tests;
