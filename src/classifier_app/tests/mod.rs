mod core_test;
mod run_effect_test;
