//! Hum Studios Site
//!
//! Marketing pages and the employee admin, built with Leptos (WASM).
//!
//! # Features
//!
//! - Home page with scroll-triggered reveal animations
//! - Employee directory loaded from the Hum Studios API
//! - Employee details screen
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads employees through the server's JSON API and is
//! served by the same server.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
