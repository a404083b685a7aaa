mod check_test;
mod list_test;
mod run_test;
mod show_test;
