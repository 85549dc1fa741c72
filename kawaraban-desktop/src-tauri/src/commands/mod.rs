pub mod comment;
pub mod compose;
pub mod export;
pub mod photos;
pub mod session;
pub mod templates;

pub use comment::*;
pub use compose::*;
pub use export::*;
pub use photos::*;
pub use session::*;
pub use templates::*;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        templates::list_month_templates,
        templates::list_layouts,
        session::get_session,
        session::select_month,
        session::select_layout,
        session::set_event_title,
        session::set_event_date,
        session::set_comment,
        session::set_section_title,
        session::set_color_override,
        session::set_font_sizes,
        session::clear_customization,
        session::undo,
        photos::add_photos,
        photos::remove_photo,
        comment::generate_comment,
        comment::generate_comment_batch,
        compose::compose_preview,
        export::export_pdf,
        export::open_exported_file,
        export::get_app_version,
    ]
}
