mod board_tests;
mod date_tests;
