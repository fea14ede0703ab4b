// Resume document rendering. Produces the HTML the external PDF pipeline rasterizes;
// rasterization itself lives outside this service.

pub mod handlers;
pub mod html;

pub use html::{pdf_filename, render_resume_html};
