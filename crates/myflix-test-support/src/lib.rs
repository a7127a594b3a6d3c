#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (canned myFlix API payloads).

pub mod fixtures;
