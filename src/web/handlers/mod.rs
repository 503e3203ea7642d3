//! HTML template rendering handlers.

mod redirect;
mod urls;

pub use redirect::redirect_handler;
pub use urls::{
    create_url, delete_url, delete_url_form, edit_url_form, index_handler, new_url_form,
    show_url, success_handler, update_url, UrlForm,
};
