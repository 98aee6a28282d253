//! Terminal drawing - turns a RenderState into ratatui widgets

use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;
use crate::views::navbar::{self, NAV_LINKS};
use crate::views::{about, benefits, FetchState, ProductCard, ProductsSnapshot, Route, StarSlot};

/// Rows taken by one product card, borders included
const CARD_HEIGHT: u16 = 10;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Navbar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_navbar(f, state, chunks[0]);

    match state.route {
        Route::Landing => draw_landing(f, state, chunks[1]),
        Route::Catalog => draw_products(f, state.products.as_ref(), chunks[1], false),
        Route::About => draw_about(f, chunks[1]),
    }

    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_navbar(f: &mut Frame, state: &RenderState, area: Rect) {
    let active = navbar::active_link(state.route);

    let mut links = Vec::new();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        let label = if link.has_menu() {
            format!(" {} ▾ ", link.label)
        } else {
            format!(" {} ", link.label)
        };
        let style = if active == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else if link.route().is_some() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        links.push(Span::styled(label, style));
        links.push(Span::raw("  "));
    }

    let menus: Vec<Span> = NAV_LINKS
        .iter()
        .filter(|link| link.has_menu())
        .map(|link| {
            let items: Vec<&str> = link.children.iter().map(|c| c.label).collect();
            Span::styled(
                format!(" {}: {}   ", link.label, items.join(" · ")),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} · {} ", state.store_name, state.route.title()))
        .title_style(Style::default().bold());

    let nav = Paragraph::new(vec![Line::from(links), Line::from(menus)]).block(block);
    f.render_widget(nav, area);
}

fn draw_landing(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(area);

    draw_products(f, state.products.as_ref(), chunks[0], true);
    draw_benefits(f, chunks[1]);
}

fn draw_products(f: &mut Frame, products: Option<&ProductsSnapshot>, area: Rect, show_view_all: bool) {
    let Some(products) = products else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" {} ", products.title))
        .title_style(Style::default().fg(Color::White).bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &products.state {
        FetchState::Loading => {
            let loading = Paragraph::new(products.loading_message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White));
            f.render_widget(loading, vertically_centered(inner));
        }
        FetchState::Error(message) => {
            let error = Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red));
            f.render_widget(error, vertically_centered(inner));
        }
        FetchState::Success => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Subtitle
                    Constraint::Min(0),    // Grid
                    Constraint::Length(1), // Footer
                ])
                .split(inner);

            let subtitle = Paragraph::new(products.subtitle)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(subtitle, chunks[0]);

            draw_card_grid(f, &products.cards, chunks[1]);

            if show_view_all {
                let footer = Paragraph::new(" View All Products (v) ")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Black).bg(Color::White));
                f.render_widget(footer, chunks[2]);
            }
        }
    }
}

fn vertically_centered(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1.min(area.height))
}

/// Columns per row for the available width
fn grid_columns(width: u16) -> usize {
    match width {
        w if w >= 120 => 4,
        w if w >= 60 => 2,
        _ => 1,
    }
}

fn draw_card_grid(f: &mut Frame, cards: &[ProductCard], area: Rect) {
    if cards.is_empty() || area.height == 0 {
        return;
    }

    let columns = grid_columns(area.width);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let selected_row = cards.iter().position(|c| c.selected).unwrap_or(0) / columns;
    // Keep the selected card's row on screen
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_slot, row_area) in rows.iter().enumerate() {
        let start = (first_row + row_slot) * columns;
        if start >= cards.len() {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (card, cell) in cards[start..].iter().take(columns).zip(cells.iter()) {
            draw_card(f, card, *cell);
        }
    }
}

fn draw_card(f: &mut Frame, card: &ProductCard, area: Rect) {
    let border_style = if card.selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let heart = if card.wishlisted {
        Span::styled(" ♥", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ♡", Style::default().fg(Color::Gray))
    };

    let carousel = match card.position {
        Some(position) => Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::White).bold()),
            Span::styled(position.to_string(), Style::default().fg(Color::Gray)),
            Span::styled(" ▶", Style::default().fg(Color::White).bold()),
        ]),
        None => Line::default(),
    };

    let mut rating: Vec<Span> = card
        .stars
        .iter()
        .map(|slot| match slot {
            StarSlot::Filled => Span::styled("★", Style::default().fg(Color::Yellow)),
            StarSlot::Empty => Span::styled("☆", Style::default().fg(Color::Gray)),
        })
        .collect();
    rating.push(Span::styled(
        format!(" {}", card.rating_label),
        Style::default().fg(Color::Gray),
    ));

    let mut price = vec![
        Span::styled(card.price_label.clone(), Style::default().bold()),
        Span::styled("  [+ Cart]", Style::default().fg(Color::Blue)),
    ];
    if card.in_stock == Some(false) {
        price.push(Span::styled("  out of stock", Style::default().fg(Color::Red)));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(card.category.clone(), Style::default().fg(Color::Blue).bold()),
            heart,
        ]),
        Line::from(Span::styled(card.name.clone(), Style::default().bold())),
        Line::from(Span::styled(
            card.summary.clone().unwrap_or_default(),
            Style::default().fg(Color::Gray).italic(),
        )),
        Line::from(format!("▣ {}", card.image.alt)),
        Line::from(Span::styled(card.image.url.clone(), Style::default().fg(Color::DarkGray))),
        carousel,
        Line::from(rating),
        Line::from(price),
    ];

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_benefits(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", benefits::HEADING))
        .title_style(Style::default().bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let subheading = Paragraph::new(benefits::SUBHEADING)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(subheading, chunks[0]);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, benefits::BENEFITS.len() as u32); benefits::BENEFITS.len()])
        .split(chunks[1]);

    for (benefit, cell) in benefits::BENEFITS.iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", benefit.icon, benefit.title),
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(Span::styled(benefit.description, Style::default().fg(Color::Gray))),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(card, *cell);
    }
}

fn draw_about(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for paragraph in about::PARAGRAPHS {
        lines.push(Line::from(paragraph));
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", about::TITLE))
        .title_style(Style::default().bold());
    let page = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(page, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (text, style) = match &state.notice {
        Some(notice) => (format!(" {} ", notice), Style::default().fg(Color::Yellow)),
        None if state.route.product_query().is_some() => (
            String::from(" 1-3:pages | ↑/↓:select | ←/→:images | w:wishlist | a:cart | ?:help | q:quit "),
            Style::default().fg(Color::DarkGray),
        ),
        None => (
            String::from(" 1-3:pages | ?:help | q:quit "),
            Style::default().fg(Color::DarkGray),
        ),
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 STOREFRONT - Keyboard Shortcuts

 PAGES
   1                  Home
   2                  About
   3 / v              All products

 PRODUCTS
   ↑ / ↓  (k / j)     Select product
   ← / →  (h / l)     Previous / next image
   w                  Toggle wishlist
   a / Enter          Add to cart

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
