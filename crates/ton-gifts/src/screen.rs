//! Screen state and text rendering.
//!
//! Every route owns one screen. The screen's state is created when the route
//! is entered and dropped when another screen replaces it. Rendering produces
//! plain text lines; styling belongs to whatever shell displays them.

use ton_connect::WalletConnectionState;

use crate::catalog::CatalogStore;
use crate::detail::DetailView;
use crate::form::SubmissionForm;
use crate::router::{Route, CATALOG_PATH, SUBMISSION_PATH};

pub const CATALOG_HEADING: &str = "Маркет подарков";
pub const CATALOG_EMPTY: &str = "Подарков пока нет.";
pub const DETAIL_LOADING: &str = "Загрузка...";
pub const SUBMISSION_HEADING: &str = "Добавить подарок";
pub const NAME_PLACEHOLDER: &str = "Название подарка";
pub const SUBMIT_LABEL: &str = "Отправить";
pub const CONNECT_LABEL: &str = "Connect Wallet";

/// A link in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Brand link back to the catalog.
pub const HOME_LINK: NavLink = NavLink {
    label: "🎁 NFT Gifts",
    href: CATALOG_PATH,
};

/// Link to the submission screen.
pub const UPLOAD_LINK: NavLink = NavLink {
    label: "Добавить",
    href: SUBMISSION_PATH,
};

pub const NAV_LINKS: [NavLink; 2] = [HOME_LINK, UPLOAD_LINK];

/// Mounted screen with its ephemeral state.
#[derive(Debug, Clone)]
pub enum Screen {
    Catalog(CatalogStore),
    Detail(DetailView),
    Submission(SubmissionForm),
}

impl Screen {
    /// Mount and activate the screen for `route`.
    pub fn enter(route: &Route) -> Self {
        match route {
            Route::Catalog => Screen::Catalog(CatalogStore::activate()),
            Route::Detail(id) => {
                let mut view = DetailView::mount(id.clone());
                view.activate();
                Screen::Detail(view)
            }
            Route::Submission => Screen::Submission(SubmissionForm::new()),
        }
    }

    /// Route this screen is mounted for.
    pub fn route(&self) -> Route {
        match self {
            Screen::Catalog(_) => Route::Catalog,
            Screen::Detail(view) => Route::Detail(view.route_id().clone()),
            Screen::Submission(_) => Route::Submission,
        }
    }

    pub fn render(&self) -> Vec<String> {
        match self {
            Screen::Catalog(store) => render_catalog(store),
            Screen::Detail(view) => render_detail(view),
            Screen::Submission(form) => render_submission(form),
        }
    }
}

fn render_catalog(store: &CatalogStore) -> Vec<String> {
    let mut lines = vec![format!("# {}", CATALOG_HEADING)];
    if store.is_empty() {
        lines.push(CATALOG_EMPTY.to_string());
    } else {
        lines.extend(
            store
                .links()
                .map(|(gift, href)| format!("[{}]({})", gift.name(), href)),
        );
    }
    lines
}

fn render_detail(view: &DetailView) -> Vec<String> {
    match view.detail() {
        Some(detail) => vec![
            format!("# {}", detail.name()),
            detail.description().to_string(),
        ],
        None => vec![DETAIL_LOADING.to_string()],
    }
}

fn render_submission(form: &SubmissionForm) -> Vec<String> {
    let input = if form.name().is_empty() {
        format!("> ({})", NAME_PLACEHOLDER)
    } else {
        format!("> {}", form.name())
    };
    vec![
        format!("# {}", SUBMISSION_HEADING),
        input,
        format!("[{}]", SUBMIT_LABEL),
    ]
}

/// Navigation bar line.
pub fn render_navbar() -> String {
    NAV_LINKS
        .iter()
        .map(|link| format!("[{}]({})", link.label, link.href))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Always-visible wallet control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletOverlay {
    /// Offers to connect a wallet.
    Connect,
    /// Shows the connected account, shortened.
    Connected(String),
}

impl WalletOverlay {
    pub fn from_state(state: &WalletConnectionState) -> Self {
        match state.account() {
            Some(account) => WalletOverlay::Connected(shorten_address(&account.display_address())),
            None => WalletOverlay::Connect,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            WalletOverlay::Connect => CONNECT_LABEL,
            WalletOverlay::Connected(short) => short.as_str(),
        }
    }
}

/// `UQAb…Wxyz` style abbreviation of a long address.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GiftId;
    use ton_address::TonAddress;
    use ton_connect::WalletAccount;

    #[test]
    fn test_catalog_render() {
        let lines = Screen::enter(&Route::Catalog).render();
        assert_eq!(
            lines,
            vec!["# Маркет подарков", "[Gift #1](/gift/1)", "[Gift #2](/gift/2)"]
        );
    }

    #[test]
    fn test_empty_catalog_render() {
        let lines = Screen::Catalog(CatalogStore::from_gifts(Vec::new())).render();
        assert_eq!(lines, vec!["# Маркет подарков", "Подарков пока нет."]);
    }

    #[test]
    fn test_detail_render() {
        let route = Route::Detail(GiftId::from("42"));
        let screen = Screen::enter(&route);
        assert_eq!(screen.render(), vec!["# Gift #42", "Описание из TON"]);
        assert_eq!(screen.route(), route);
    }

    #[test]
    fn test_detail_loading_render() {
        let screen = Screen::Detail(DetailView::mount(GiftId::from("1")));
        assert_eq!(screen.render(), vec![DETAIL_LOADING]);
    }

    #[test]
    fn test_submission_render() {
        let mut form = SubmissionForm::new();
        assert_eq!(
            Screen::Submission(form.clone()).render(),
            vec!["# Добавить подарок", "> (Название подарка)", "[Отправить]"]
        );

        form.edit("Birthday Box");
        assert_eq!(Screen::Submission(form).render()[1], "> Birthday Box");
    }

    #[test]
    fn test_navbar() {
        assert_eq!(render_navbar(), "[🎁 NFT Gifts](/) | [Добавить](/upload)");
    }

    #[test]
    fn test_wallet_overlay() {
        let overlay = WalletOverlay::from_state(&WalletConnectionState::disconnected());
        assert_eq!(overlay, WalletOverlay::Connect);
        assert_eq!(overlay.label(), CONNECT_LABEL);

        let account = WalletAccount::new(TonAddress::new(0, [0x01; 32]));
        let full = account.display_address();
        let overlay = WalletOverlay::from_state(&WalletConnectionState::connected(account));
        let label = overlay.label().to_string();
        assert!(label.starts_with(&full[..4]));
        assert!(label.ends_with(&full[full.len() - 4..]));
        assert_eq!(label.chars().count(), 9);
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address("short"), "short");
        assert_eq!(shorten_address("UQABCDEFGHIJKLMN"), "UQAB…KLMN");
    }
}
