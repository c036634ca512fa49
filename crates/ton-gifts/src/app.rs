//! App dispatcher tying the router, the mounted screen and the wallet together.

use std::sync::Arc;
use std::time::SystemTime;

use ton_connect::{Subscription, WalletConnector, WalletGate};
use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::detail::DetailView;
use crate::error::GiftResult;
use crate::form::{SubmissionForm, SubmitOutcome};
use crate::notice::Notifier;
use crate::router::{Route, Router};
use crate::screen::{render_navbar, NavLink, Screen, WalletOverlay};
use crate::types::GiftSummary;

/// The gifts app.
///
/// All user events go through this type: navigation, draft edits and
/// submission. It owns the router and the one mounted screen; the wallet state
/// is only read through the gate.
pub struct GiftApp<C: ?Sized, N> {
    config: AppConfig,
    router: Router,
    screen: Option<Screen>,
    gate: WalletGate<C>,
    notifier: N,
    _wallet_watch: Subscription,
}

impl<C, N> GiftApp<C, N>
where
    C: WalletConnector + ?Sized,
    N: Notifier,
{
    /// Start the app on the catalog screen.
    pub fn new(connector: Arc<C>, notifier: N, config: AppConfig) -> Self {
        let gate = WalletGate::new(connector);
        let wallet_watch = gate.subscribe(|state| match state.account() {
            Some(account) => info!("Wallet connected: {}", account.address),
            None => info!("Wallet disconnected"),
        });

        let router = Router::new();
        let screen = router.route().map(Screen::enter);
        info!("Gift app started, manifest at {}", config.manifest_url);

        Self {
            config,
            router,
            screen,
            gate,
            notifier,
            _wallet_watch: wallet_watch,
        }
    }

    /// Navigate to `path`, mounting the screen it routes to.
    ///
    /// Staying on the same screen keeps its state; a detail screen follows a
    /// changed gift id. An unmatched path unmounts everything.
    pub fn navigate(&mut self, path: &str) -> Option<&Route> {
        let route = self.router.navigate(path).cloned();

        self.screen = match (self.screen.take(), route) {
            (Some(Screen::Detail(mut view)), Some(Route::Detail(id))) => {
                view.set_route_id(id);
                Some(Screen::Detail(view))
            }
            (Some(screen), Some(route)) if screen.route().same_screen(&route) => Some(screen),
            (_, Some(route)) => {
                debug!("Mounting screen for {:?}", route);
                Some(Screen::enter(&route))
            }
            (_, None) => None,
        };

        self.router.route()
    }

    /// Activate a navigation bar link.
    pub fn follow(&mut self, link: &NavLink) -> Option<&Route> {
        self.navigate(link.href)
    }

    /// Activate a catalog entry's link.
    pub fn open_gift(&mut self, gift: &GiftSummary) -> Option<&Route> {
        let path = Route::Detail(gift.id().clone()).path();
        self.navigate(&path)
    }

    /// Feed an edit event to the submission form.
    ///
    /// Returns `false` when the submission screen is not mounted.
    pub fn edit_draft(&mut self, value: impl Into<String>) -> bool {
        match &mut self.screen {
            Some(Screen::Submission(form)) => {
                form.edit(value);
                true
            }
            _ => false,
        }
    }

    /// Submit the mounted form; `None` when the submission screen is not mounted.
    pub async fn submit(&self) -> Option<SubmitOutcome> {
        self.submit_at(SystemTime::now()).await
    }

    /// Submit with an explicit clock reading for the validity window.
    pub async fn submit_at(&self, now: SystemTime) -> Option<SubmitOutcome> {
        let Some(Screen::Submission(form)) = &self.screen else {
            debug!("Submit ignored outside the submission screen");
            return None;
        };
        Some(form.submit(&self.gate, &self.notifier, &self.config, now).await)
    }

    /// Disconnect through the wallet control.
    pub async fn disconnect_wallet(&self) -> GiftResult<()> {
        self.gate.connector().disconnect().await?;
        Ok(())
    }

    pub fn wallet_overlay(&self) -> WalletOverlay {
        WalletOverlay::from_state(&self.gate.state())
    }

    /// Whole page as text: navbar, mounted screen, wallet control.
    pub fn render(&self) -> String {
        let mut lines = vec![render_navbar()];
        if let Some(screen) = &self.screen {
            lines.extend(screen.render());
        }
        lines.push(format!("[{}]", self.wallet_overlay().label()));
        lines.join("\n")
    }

    pub fn route(&self) -> Option<&Route> {
        self.router.route()
    }

    pub fn active_path(&self) -> &str {
        self.router.active_path()
    }

    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    pub fn catalog(&self) -> Option<&CatalogStore> {
        match &self.screen {
            Some(Screen::Catalog(store)) => Some(store),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailView> {
        match &self.screen {
            Some(Screen::Detail(view)) => Some(view),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&SubmissionForm> {
        match &self.screen {
            Some(Screen::Submission(form)) => Some(form),
            _ => None,
        }
    }

    pub fn gate(&self) -> &WalletGate<C> {
        &self.gate
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
