use minijinja::{Environment, context};

use crate::application::use_cases::list_images::ListImagesResponse;
use crate::presentation::http::dto::ImageDto;

const INDEX_TEMPLATE: &str = "index.html";

pub struct GalleryPage {
    pub images: Vec<ImageDto>,
    pub current_page: usize,
    pub total_pages: usize,
    pub error: Option<String>,
}

impl GalleryPage {
    pub fn failed(message: &str) -> Self {
        Self {
            images: Vec::new(),
            current_page: 1,
            total_pages: 1,
            error: Some(message.to_string()),
        }
    }
}

impl From<ListImagesResponse> for GalleryPage {
    fn from(response: ListImagesResponse) -> Self {
        Self {
            images: response.images.into_iter().map(ImageDto::from).collect(),
            current_page: response.page,
            total_pages: response.total_pages,
            error: None,
        }
    }
}

/// Renders the gallery markup. Templates are compiled into the binary.
pub struct GalleryView {
    env: Environment<'static>,
}

impl GalleryView {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("index.html"))?;
        Ok(Self { env })
    }

    pub fn render_index(&self, page: &GalleryPage) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        template.render(context! {
            images => &page.images,
            current_page => page.current_page,
            total_pages => page.total_pages,
            error => &page.error,
        })
    }
}
