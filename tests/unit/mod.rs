/// Unit tests for the habit domain and statistics
mod basic_tests;
