#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Cairn Web UI: the dataset detail surface of the metadata catalog.
//!
//! This crate holds the Yew front-end entrypoint plus the DOM-free feature
//! logic (link list management, compliance policy editing) that is tested
//! off-wasm.

pub mod core;
pub mod features;
pub mod i18n;
pub mod models;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::features::compliance::logic::fold_policy_read;
    use crate::i18n::{LocaleCode, TranslationBundle};
    use crate::services::error::ApiError;
    use cairn_api_models::CompliancePolicy;

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::De);
        assert_eq!(bundle.text("links.title", ""), "Institutionelles Wissen");
        assert_eq!(bundle.text("links.missing_key", "Default"), "Default");
    }

    #[test]
    fn not_found_compliance_read_synthesizes_a_default() {
        let read = fold_policy_read(
            "urn:li:dataset:1",
            Err(ApiError::NotFound {
                path: "/v1/datasets/urn%3Ali%3Adataset%3A1/compliance".to_string(),
            }),
        )
        .expect("not-found should fold to a default policy");
        assert!(read.is_new);
        assert_eq!(read.policy, CompliancePolicy::default_for("urn:li:dataset:1"));
    }
}
