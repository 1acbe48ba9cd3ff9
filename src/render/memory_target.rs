use crate::render::RenderTarget;
use crate::Error;

/// In-memory region used to observe rendering without a page file.
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryTarget {
    pub children: Vec<String>,
    pub replace_count: usize,
    pub append_count: usize,
}

impl MemoryTarget {
    pub(crate) fn html(&self) -> String {
        self.children.concat()
    }
}

impl RenderTarget for MemoryTarget {
    fn replace_children(&mut self, html: String) -> Result<(), Error> {
        self.children = vec![html];
        self.replace_count += 1;
        Ok(())
    }

    fn append_child(&mut self, html: String) -> Result<(), Error> {
        self.children.push(html);
        self.append_count += 1;
        Ok(())
    }
}
