//! End-to-end tests driving the full router against the in-memory store.

mod helpers;

mod auth_test;
mod character_test;
mod inventory_test;
mod item_test;
