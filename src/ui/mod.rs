mod anomaly;
mod channels;
mod error_dialog;
mod plot;
mod toolbar;

pub use anomaly::render_anomaly_window;
pub use channels::render_channel_panel;
pub use error_dialog::render_error_dialog;
pub use plot::render_main_plot_window;
pub use toolbar::render_toolbar;
