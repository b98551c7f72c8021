//! Artwork lightbox state

use crate::content::Artwork;

/// What the open overlay shows
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxView {
    pub title: String,
    pub year: String,
    pub medium: String,
    pub description: String,
    pub image_url: String,
}

impl From<&Artwork> for LightboxView {
    fn from(artwork: &Artwork) -> Self {
        Self {
            title: artwork.title.clone(),
            year: artwork.year_label(),
            medium: artwork.medium.clone(),
            description: artwork.description.clone(),
            image_url: artwork.image_url.clone(),
        }
    }
}

/// Modal overlay: closed, or open on one artwork
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    /// Open on the artwork at `index`; replaces whatever was shown
    pub fn open(&mut self, index: usize) {
        self.open = Some(index);
    }

    /// Background click or close control
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Populated overlay content, `None` when closed or out of range
    pub fn view(&self, artworks: &[Artwork]) -> Option<LightboxView> {
        self.open
            .and_then(|i| artworks.get(i))
            .map(LightboxView::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Year;

    #[test]
    fn test_open_shows_metadata_and_close_dismisses() {
        let artworks = vec![
            Artwork::new("Chum", "Sculpture"),
            Artwork {
                year: Some(Year::Number(2005)),
                medium: "Acrylic on canvas".into(),
                description: "Large canvas".into(),
                image_url: "img/full.jpg".into(),
                ..Artwork::new("Untitled", "Painting")
            },
        ];
        let mut lightbox = Lightbox::default();
        assert!(lightbox.view(&artworks).is_none());

        lightbox.open(1);
        let view = lightbox.view(&artworks).unwrap();
        assert_eq!(view.title, "Untitled");
        assert_eq!(view.year, "2005");
        assert_eq!(view.medium, "Acrylic on canvas");
        assert_eq!(view.image_url, "img/full.jpg");

        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(lightbox.view(&artworks).is_none());
    }

    #[test]
    fn test_out_of_range_index_shows_nothing() {
        let mut lightbox = Lightbox::default();
        lightbox.open(3);
        assert!(lightbox.is_open());
        assert!(lightbox.view(&[]).is_none());
    }
}
