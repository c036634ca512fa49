//! # ton-gifts
//!
//! Route-addressed view state for a small TON NFT gift market.
//!
//! The app has three screens and one always-visible wallet control:
//!
//! - `/`: the catalog, a fixed list of gift summaries.
//! - `/gift/{id}`: a gift's detail, resolved from the id in the path.
//! - `/upload`: a form whose submit sends a 0.001 TON transaction from the
//!   connected wallet back to itself.
//!
//! Screens are plain state objects rendered to text, so any shell can drive
//! them. The wallet sits behind [`ton_connect::WalletConnector`]; submission
//! is refused with a blocking notice while no wallet is connected.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use ton_connect::MockWallet;
//! use ton_gifts::{AppConfig, GiftApp, NoticeLog, Route};
//!
//! let mut app = GiftApp::new(Arc::new(MockWallet::new()), NoticeLog::new(), AppConfig::default());
//! assert_eq!(app.route(), Some(&Route::Catalog));
//!
//! app.navigate("/gift/42");
//! let detail = app.detail().and_then(|view| view.detail()).unwrap();
//! assert_eq!(detail.name(), "Gift #42");
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod form;
pub mod notice;
pub mod router;
pub mod screen;
pub mod types;

// Re-export main types
pub use app::GiftApp;
pub use catalog::{CatalogStore, PLACEHOLDER_GIFTS};
pub use config::AppConfig;
pub use detail::{DetailResolver, DetailView, PLACEHOLDER_DESCRIPTION};
pub use error::{GiftError, GiftResult};
pub use form::{gift_transaction, DraftSubmission, SubmissionForm, SubmitOutcome, CONNECT_WALLET_NOTICE};
pub use notice::{LogNotifier, NoticeLog, Notifier};
pub use router::{Route, Router};
pub use screen::{NavLink, Screen, WalletOverlay, HOME_LINK, NAV_LINKS, UPLOAD_LINK};
pub use types::{GiftDetail, GiftId, GiftSummary};
