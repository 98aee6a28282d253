//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::views::Route;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Routing
    Navigate(Route),

    // Product grid
    NextCard,
    PrevCard,
    NextImage,
    PrevImage,
    ToggleWishlist,
    AddToCart,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, route: Route, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => Some(UiEvent::Navigate(Route::Landing)),
        KeyCode::Char('2') => Some(UiEvent::Navigate(Route::About)),
        KeyCode::Char('3') => Some(UiEvent::Navigate(Route::Catalog)),
        _ if route.product_query().is_some() => product_grid_keys(key.code, route),
        _ => None,
    }
}

/// Keys for routes that show a product grid
fn product_grid_keys(code: KeyCode, route: Route) -> Option<UiEvent> {
    match code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(UiEvent::NextCard),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(UiEvent::PrevCard),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextImage),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevImage),
        KeyCode::Char('w') => Some(UiEvent::ToggleWishlist),
        KeyCode::Char('a') | KeyCode::Enter => Some(UiEvent::AddToCart),
        KeyCode::Char('v') if route == Route::Landing => Some(UiEvent::Navigate(Route::Catalog)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_route_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('2')), Route::Landing, false),
            Some(UiEvent::Navigate(Route::About))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('v')), Route::Landing, false),
            Some(UiEvent::Navigate(Route::Catalog))
        );
    }

    #[test]
    fn test_carousel_keys_only_on_grid_routes() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Left), Route::Catalog, false),
            Some(UiEvent::PrevImage)
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Left), Route::About, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('v')), Route::Catalog, false), None);
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), Route::Landing, true),
            Some(UiEvent::CloseHelp)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, Route::Landing, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, Route::Landing, false), None);
    }
}
