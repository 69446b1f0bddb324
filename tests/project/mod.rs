mod tests_project;
mod tests_resolution;
