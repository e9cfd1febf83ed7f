mod tests_dialects;
mod tests_errors;
mod tests_lossless;
