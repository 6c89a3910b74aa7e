use crate::app::DirectoryApp;
use crate::constants::{CARD_SPACING, CARD_WIDTH};
use crate::data::directory_view::{self, GridView, ServiceCard};
use crate::services::{CategoryFilter, Stars};
use crate::ui_components::colors;
use crate::ui_components::helpers::{calculate_grid_layout, truncate_text};
use eframe::egui::{self, Color32, CornerRadius, RichText, Sense};

/// Interactions collected while painting, applied once the frame's UI is built
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryAction {
    Rate(u64, Stars),
    SelectCategory(CategoryFilter),
    CopyPhone(String),
    OpenLink(String),
    ScrollToAbout,
    RetryLoad,
}

/// Directory view - header with search and categories, card grid, about footer
pub fn render_directory(app: &mut DirectoryApp, ctx: &egui::Context) {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("directory_header")
        .frame(
            egui::Frame::new()
                .fill(colors::BG_CARD)
                .inner_margin(egui::Margin::symmetric(20, 14)),
        )
        .show(ctx, |ui| {
            render_header(app, ui, &mut actions);
        });

    // Whole grid is re-derived from state every frame
    let view = directory_view::project(&app.content, app.rated_set());

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(20.0);
                render_grid(ui, &view, &mut actions);
                ui.add_space(40.0);
                render_about(app, ui);
                ui.add_space(20.0);
            });
    });

    for action in actions {
        app.handle_action(action);
    }
}

fn render_header(app: &mut DirectoryApp, ui: &mut egui::Ui, actions: &mut Vec<DirectoryAction>) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("📍 Guia Local")
                .size(24.0)
                .color(Color32::WHITE)
                .strong(),
        );
        ui.add_space(20.0);

        ui.label(RichText::new("🔍").size(18.0));
        let search_response = ui.add_sized(
            egui::vec2(320.0, 30.0),
            egui::TextEdit::singleline(&mut app.content.current_search)
                .hint_text("Search by name or description...")
                .desired_width(320.0),
        );
        if search_response.changed() {
            log::debug!("[Directory] Search -> '{}'", app.content.current_search);
        }

        if !app.content.current_search.is_empty() && ui.button("✖").clicked() {
            app.content.current_search.clear();
        }

        if app.content.is_loading() {
            ui.add_space(10.0);
            ui.spinner();
        }
    });

    ui.add_space(10.0);

    let categories: Vec<String> = app.content.categories().into_iter().map(str::to_string).collect();

    ui.horizontal_wrapped(|ui| {
        let all_selected = app.content.current_filter == CategoryFilter::All;
        if ui.selectable_label(all_selected, "All").clicked() && !all_selected {
            actions.push(DirectoryAction::SelectCategory(CategoryFilter::All));
        }

        for category in categories {
            let filter = CategoryFilter::Category(category.clone());
            let selected = app.content.current_filter == filter;
            if ui.selectable_label(selected, capitalize(&category)).clicked() && !selected {
                log::debug!("[Directory] Category filter -> {}", category);
                actions.push(DirectoryAction::SelectCategory(filter));
            }
        }

        ui.add_space(20.0);
        if ui.button("ℹ About").clicked() {
            actions.push(DirectoryAction::ScrollToAbout);
        }
    });
}

fn render_grid(ui: &mut egui::Ui, view: &GridView, actions: &mut Vec<DirectoryAction>) {
    match view {
        GridView::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(
                    RichText::new("Loading services...")
                        .size(16.0)
                        .color(colors::TEXT_SECONDARY),
                );
            });
        }
        GridView::Failed { title, message } => {
            render_message_state(ui, title, message);
            ui.vertical_centered(|ui| {
                ui.add_space(15.0);
                if ui.button("⟳ Retry").clicked() {
                    actions.push(DirectoryAction::RetryLoad);
                }
            });
        }
        GridView::Empty { title, message } => render_message_state(ui, title, message),
        GridView::Cards(cards) => {
            let (items_per_row, padding) =
                calculate_grid_layout(ui.available_width(), CARD_WIDTH, CARD_SPACING);

            for chunk in cards.chunks(items_per_row) {
                ui.horizontal_top(|ui| {
                    ui.add_space(padding);
                    for card in chunk {
                        render_service_card(ui, card, actions);
                        ui.add_space(CARD_SPACING);
                    }
                });
                ui.add_space(CARD_SPACING);
            }
        }
    }
}

fn render_message_state(ui: &mut egui::Ui, title: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.label(RichText::new(title).size(20.0).color(colors::TEXT_SECONDARY));
        ui.add_space(10.0);
        ui.label(RichText::new(message).size(14.0).color(colors::TEXT_MUTED));
    });
}

fn render_service_card(ui: &mut egui::Ui, card: &ServiceCard, actions: &mut Vec<DirectoryAction>) {
    let inner_margin = 14;

    let response = egui::Frame::new()
        .fill(colors::BG_CARD)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(inner_margin))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH - 2.0 * inner_margin as f32);

            // Header: name + phone, category badge on the right
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(truncate_text(&card.name, 28))
                            .size(17.0)
                            .color(Color32::WHITE)
                            .strong(),
                    );
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("📞 {}", card.phone))
                                .size(13.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                        if ui
                            .small_button("📋")
                            .on_hover_text("Copy phone number")
                            .clicked()
                        {
                            actions.push(DirectoryAction::CopyPhone(card.phone.clone()));
                        }
                    });
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.label(
                        RichText::new(&card.category_label)
                            .size(11.0)
                            .color(colors::STAR_FILLED)
                            .strong(),
                    );
                });
            });

            ui.add_space(8.0);
            ui.label(RichText::new(&card.description).size(13.0));
            ui.add_space(10.0);

            render_stars(ui, card, actions);

            if !card.social_links.is_empty() {
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for link in &card.social_links {
                        if ui.link(link.label).on_hover_text(link.url.as_str()).clicked() {
                            actions.push(DirectoryAction::OpenLink(link.url.clone()));
                        }
                    }
                });
            }
        })
        .response;

    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            CornerRadius::same(8),
            egui::Stroke::new(1.0, colors::BG_CARD_HOVER),
            egui::StrokeKind::Inside,
        );
    }
}

fn render_stars(ui: &mut egui::Ui, card: &ServiceCard, actions: &mut Vec<DirectoryAction>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;

        for (stars, filled) in Stars::all().zip(card.stars) {
            let color = if filled { colors::STAR_FILLED } else { colors::STAR_EMPTY };
            let text = RichText::new("★").size(22.0).color(color);

            if card.rated {
                ui.label(text);
                continue;
            }

            let response = ui
                .add(egui::Label::new(text).sense(Sense::click()))
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .on_hover_text(format!("Rate {} of 5", stars.value()));
            if response.clicked() {
                log::info!("[Directory] Star {} clicked for service {}", stars.value(), card.id);
                actions.push(DirectoryAction::Rate(card.id, stars));
            }
        }

        ui.add_space(8.0);
        ui.label(RichText::new(&card.average_label).size(14.0).strong());
        ui.label(
            RichText::new(card.reviews_label())
                .size(12.0)
                .color(colors::TEXT_SECONDARY),
        );

        if card.rated {
            ui.add_space(6.0);
            ui.label(
                RichText::new("✔ Rated")
                    .size(12.0)
                    .color(colors::RATED_BADGE)
                    .strong(),
            );
        }
    });
}

fn render_about(app: &mut DirectoryApp, ui: &mut egui::Ui) {
    ui.separator();
    ui.add_space(10.0);

    let heading = ui.label(
        RichText::new("About")
            .size(20.0)
            .color(Color32::WHITE)
            .strong(),
    );
    if app.ui.take_scroll_to_about() {
        heading.scroll_to_me(Some(egui::Align::TOP));
    }

    ui.add_space(8.0);
    ui.label(
        RichText::new(
            "Guia Local lists the small businesses and service providers of the \
             neighbourhood. Search by name, filter by category and leave a star \
             rating - one per service.",
        )
        .size(13.0)
        .color(colors::TEXT_SECONDARY),
    );
    ui.add_space(4.0);
    ui.label(
        RichText::new("Ratings are kept on this computer only.")
            .size(12.0)
            .color(colors::TEXT_MUTED),
    );
}

/// Capitalize first letter of a string
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
