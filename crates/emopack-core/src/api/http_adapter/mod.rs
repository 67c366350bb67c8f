//! HTTP client for the Bilibili emote endpoints.
//!
//! Implements [`EmoteApi`] over `reqwest`: builds the query strings, attaches
//! the session cookie and browser user-agent, and decodes the
//! `{code, message, data}` envelope into typed payloads.

mod client;
mod protocol;

pub use client::HttpEmoteClient;
