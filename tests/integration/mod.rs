/// Integration tests against SQLite-backed storage
mod basic_integration;
