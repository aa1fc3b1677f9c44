use crate::image_classifier::decision::Label;
use crate::image_picker::impl_path_slot::PathSlot;
use crate::screen::interface::{Screen, View};
use crate::user_input::impl_gui::ActionBroadcaster;
use crate::user_input::interface::UserAction;
use egui::{Color32, RichText};
use image::DynamicImage;
use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const PREVIEW_HEIGHT: f32 = 300.0;
const PREVIEW_MAX_SIDE: u32 = 1024;

/// State shared between the app thread (which renders) and the window.
#[derive(Clone, Default)]
pub struct GuiShared {
    view: Arc<Mutex<View>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl GuiShared {
    pub fn new() -> Self {
        Self::default()
    }

    fn view(&self) -> View {
        self.view
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_view(&self, view: View) {
        *self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = view;
    }

    fn attach(&self, ctx: &egui::Context) {
        let mut context = self
            .context
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if context.is_none() {
            *context = Some(ctx.clone());
        }
    }

    fn request_repaint(&self) {
        let context = self
            .context
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ctx) = context.as_ref() {
            ctx.request_repaint();
        }
    }
}

pub struct ScreenGui {
    shared: GuiShared,
}

impl ScreenGui {
    pub fn new(shared: GuiShared) -> Self {
        Self { shared }
    }
}

impl Screen for ScreenGui {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shared.set_view(view.clone());
        self.shared.request_repaint();
        Ok(())
    }
}

struct GuiWindow {
    shared: GuiShared,
    path_slot: PathSlot,
    actions: ActionBroadcaster,
    path: String,
    texture: Option<(usize, egui::TextureHandle)>,
}

impl GuiWindow {
    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        image: Option<&Arc<DynamicImage>>,
    ) -> Option<egui::TextureHandle> {
        let image = image?;
        let key = Arc::as_ptr(image) as usize;

        let stale = self
            .texture
            .as_ref()
            .map_or(true, |(cached, _)| *cached != key);
        if stale {
            let rgba = image.thumbnail(PREVIEW_MAX_SIDE, PREVIEW_MAX_SIDE).to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            let handle = ctx.load_texture("selected-image", color_image, egui::TextureOptions::LINEAR);
            self.texture = Some((key, handle));
        }

        self.texture.as_ref().map(|(_, handle)| handle.clone())
    }

    fn pick(&mut self) {
        let path = self.path.trim();
        self.path_slot
            .set((!path.is_empty()).then(|| PathBuf::from(path)));
        self.actions.send(UserAction::PickImage);
    }
}

impl eframe::App for GuiWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shared.attach(ctx);
        let view = self.shared.view();

        if view.should_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let texture = self.texture_for(ctx, view.image.as_ref());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                match &texture {
                    Some(texture) => {
                        let size = texture.size_vec2();
                        let scale = PREVIEW_HEIGHT / size.y.max(1.0);
                        ui.image((texture.id(), size * scale));
                    }
                    None => {
                        ui.label(
                            RichText::new(&view.image_caption)
                                .heading()
                                .color(Color32::GRAY),
                        );
                    }
                }

                ui.add_space(8.0);
                ui.label(RichText::new(&view.prediction).heading());

                if view.show_feedback {
                    ui.add_space(8.0);
                    ui.label("Was the prediction correct?");
                    ui.horizontal(|ui| {
                        let cat = egui::Button::new(
                            RichText::new("Correct as Cat").color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(52, 199, 89));
                        if ui.add_enabled(!view.busy, cat).clicked() {
                            self.actions.send(UserAction::ConfirmLabel(Label::Cat));
                        }

                        let dog = egui::Button::new(
                            RichText::new("Correct as Dog").color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(0, 122, 255));
                        if ui.add_enabled(!view.busy, dog).clicked() {
                            self.actions.send(UserAction::ConfirmLabel(Label::Dog));
                        }
                    });
                }

                if let Some(message) = &view.feedback_message {
                    ui.label(message);
                }

                ui.separator();

                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.path);
                    if ui
                        .add_enabled(!view.busy, egui::Button::new("Pick an Image"))
                        .clicked()
                    {
                        self.pick();
                    }
                });

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!view.busy, egui::Button::new("Export dataset"))
                        .clicked()
                    {
                        self.actions.send(UserAction::ExportDataset);
                    }
                    if ui.button("Quit").clicked() {
                        self.actions.send(UserAction::Quit);
                    }
                });

                if view.busy {
                    ui.spinner();
                }
            });
        });
    }
}

/// Blocks until the window is closed. Must run on the main thread.
pub fn run_window(
    shared: GuiShared,
    path_slot: PathSlot,
    actions: ActionBroadcaster,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([440.0, 560.0]),
        ..Default::default()
    };

    let window = GuiWindow {
        shared,
        path_slot,
        actions,
        path: String::new(),
        texture: None,
    };

    eframe::run_native("Cat or Dog", options, Box::new(|_cc| Box::new(window)))
}
