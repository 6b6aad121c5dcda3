mod helpers;
mod seed_test;
mod staff_store_test;
