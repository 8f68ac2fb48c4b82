mod tests_file_loader;
