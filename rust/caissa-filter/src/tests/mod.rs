mod filter_tests;
mod mask_tests;
