use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, trace};

use crate::html::escape;
use crate::render::RenderTarget;
use crate::Error;

/// A standalone HTML page on disk whose container element is the render region.
/// The whole document is rewritten after every mutation of the region.
#[derive(Debug)]
pub struct PageFile {
    path: PathBuf,
    container_id: String,
    title: String,
    children: Vec<String>,
}

impl PageFile {
    /// Writes an empty page so the container exists before the first render.
    pub fn create(
        path: impl Into<PathBuf>,
        container_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, Error> {
        let page = Self {
            path: path.into(),
            container_id: container_id.into(),
            title: title.into(),
            children: Vec::new(),
        };

        page.write()?;
        info!(path = %page.path.display(), container_id = %page.container_id, "Created page file");
        Ok(page)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn document(&self) -> String {
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html>\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<title>{title}</title>\n",
                "</head>\n",
                "<body>\n",
                "<div id=\"{id}\">{children}</div>\n",
                "</body>\n",
                "</html>\n"
            ),
            title = escape(&self.title),
            id = escape(&self.container_id),
            children = self.children.concat(),
        )
    }

    // Readers never observe a half-written page.
    fn write(&self) -> Result<(), Error> {
        let tmp_path = self.path.with_extension("html.tmp");
        fs::write(&tmp_path, self.document())?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            fs::remove_file(&tmp_path).ok();
            return Err(e.into());
        }
        trace!(path = %self.path.display(), children = self.children.len(), "Wrote page file");
        Ok(())
    }
}

impl RenderTarget for PageFile {
    fn replace_children(&mut self, html: String) -> Result<(), Error> {
        self.children = vec![html];
        self.write()
    }

    fn append_child(&mut self, html: String) -> Result<(), Error> {
        self.children.push(html);
        self.write()
    }
}
