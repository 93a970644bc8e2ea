//! vklayer - client layer for the VK API
//!
//! The centrepiece is template-based response validation: reference
//! responses ("templates") are stored on disk, and live responses are
//! structurally compared against them before any model is built from
//! the payload. Around it sit the method catalog and request builder,
//! typed models with their mappers, point extraction helpers, and a
//! CLI for managing the template store.
//!
//! Subsystems:
//! - [`api`] - method catalog, request construction, API errors
//! - [`validation`] - structural comparator, rule language, dispatch
//! - [`template`] - disk-backed template store and bootstrap
//! - [`model`] - typed response models and mappers
//! - [`parser`] - single-field extraction from raw payloads
//! - [`observability`] - structured JSON logging
//! - [`cli`] - command-line interface

pub mod api;
pub mod cli;
pub mod model;
pub mod observability;
pub mod parser;
pub mod template;
pub mod validation;
