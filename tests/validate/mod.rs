mod tests_validator;
