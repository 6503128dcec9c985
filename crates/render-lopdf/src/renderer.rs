use crate::error::RenderError;
use image::ImageReader;
use lootpixel_types::Rect;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use std::io::Write;
use std::path::Path;

/// Annotation key holding an anchor's name on its placeholder link.
pub const ANCHOR_NAME_KEY: &[u8] = b"NM";
const IMAGE_RESOURCE: &str = "Im0";

/// A named clickable region to embed on a page. The destination is filled in
/// after the document is assembled and page indices are known.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPlacement {
    pub name: String,
    pub rect: Rect,
}

/// Decoded page artwork as 8-bit RGB.
#[derive(Debug, Clone)]
pub struct PageImage {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl PageImage {
    /// Loads and decodes an image. Any failure to read or decode is a
    /// [`RenderError::CorruptAsset`].
    pub fn open(path: &Path) -> Result<Self, RenderError> {
        let corrupt = |message: String| RenderError::CorruptAsset {
            path: path.display().to_string(),
            message,
        };
        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| corrupt(e.to_string()))?
            .decode()
            .map_err(|e| corrupt(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(corrupt("image has no pixels".to_string()));
        }
        Ok(Self {
            width,
            height,
            rgb: rgb.into_raw(),
        })
    }

    /// Wraps raw 8-bit RGB pixels, row-major.
    pub fn from_rgb(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * 3;
        if width == 0 || height == 0 || rgb.len() != expected {
            return Err(RenderError::CorruptAsset {
                path: "<memory>".to_string(),
                message: format!(
                    "expected {} bytes for a {}x{} RGB image, got {}",
                    expected,
                    width,
                    height,
                    rgb.len()
                ),
            });
        }
        Ok(Self { width, height, rgb })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Renders the image at `image_path` as a single-page document.
pub fn render_page(image_path: &Path, anchors: &[AnchorPlacement]) -> Result<Document, RenderError> {
    let image = PageImage::open(image_path)?;
    log::debug!(
        "[COMPOSITOR] {} ({}x{}) with {} anchors",
        image_path.display(),
        image.width,
        image.height,
        anchors.len()
    );
    render_image_page(image, anchors)
}

/// Builds a one-page document whose MediaBox equals the image's pixel size,
/// with the image filling the page and one unresolved link per anchor.
pub fn render_image_page(image: PageImage, anchors: &[AnchorPlacement]) -> Result<Document, RenderError> {
    let page_width = image.width as f32;
    let page_height = image.height as f32;

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut image_stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        image.rgb,
    );
    image_stream.compress()?;
    let image_id = doc.add_object(image_stream);

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    page_width.into(),
                    0.into(),
                    0.into(),
                    page_height.into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![IMAGE_RESOURCE.into()]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let annots: Vec<Object> = anchors
        .iter()
        .map(|anchor| {
            let [llx, lly, urx, ury] = anchor.rect.to_pdf_rect(page_height);
            let annot = dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Rect" => vec![llx.into(), lly.into(), urx.into(), ury.into()],
                "Border" => vec![0.into(), 0.into(), 0.into()],
                "NM" => Object::String(anchor.name.as_bytes().to_vec(), StringFormat::Literal),
            };
            Object::Reference(doc.add_object(annot))
        })
        .collect();

    let mut page_dict = dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! { IMAGE_RESOURCE => image_id },
        },
    };
    if !annots.is_empty() {
        page_dict.set("Annots", Object::Array(annots));
    }
    let page_id = doc.add_object(page_dict);

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

/// Serializes a document to `writer`.
pub fn save_document<W: Write>(doc: &mut Document, writer: &mut W) -> Result<(), RenderError> {
    doc.save_to(writer)?;
    Ok(())
}
