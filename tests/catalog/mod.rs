mod tests_catalog;
mod tests_scenarios;
