//! Operation catalog
//!
//! Static reference data describing every operation the playground lists,
//! grouped into categories and optional subcategories. Only a subset is
//! backed by a real transform; see [`CatalogEntry::is_implemented`].

use serde::Serialize;

use crate::ops::OperationKind;
use crate::params::Operation;

/// Mid gray packed as `0xRRGGBB`, the default custom padding color.
const PACKED_MID_GRAY: f64 = 0x80_80_80 as f64;

/// One operation as listed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub subcategory: Option<&'static str>,
    pub description: &'static str,
    /// Default parameter values by name
    pub parameters: &'static [(&'static str, f64)],
}

impl CatalogEntry {
    /// Whether dispatching this entry runs its own transform.
    pub fn is_implemented(&self) -> bool {
        OperationKind::from_id(self.id).is_implemented()
    }

    /// An [`Operation`] for this entry, pre-filled with its defaults.
    pub fn to_operation(&self) -> Operation {
        self.parameters
            .iter()
            .fold(Operation::new(self.id), |op, &(name, value)| {
                op.with_param(name, value)
            })
    }
}

/// A named group of entries inside a category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Subcategory {
    pub id: &'static str,
    pub name: &'static str,
    pub entries: &'static [CatalogEntry],
}

/// A top-level category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub subcategories: &'static [Subcategory],
    pub entries: &'static [CatalogEntry],
}

impl Category {
    /// All entries in this category, subcategories first.
    pub fn entries(&self) -> impl Iterator<Item = &'static CatalogEntry> + use<> {
        let subs = self.subcategories;
        let direct = self.entries;
        subs.iter().flat_map(|s| s.entries.iter()).chain(direct.iter())
    }
}

/// Every category, in display order.
pub static CATALOG: &[Category] = &[
    Category {
        id: "acquisition",
        name: "Image Acquisition",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "capture",
                name: "Capture Image",
                category: "acquisition",
                subcategory: None,
                description: "Capturing image via sensors or input devices",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "preprocessing",
        name: "Preprocessing",
        subcategories: &[
            Subcategory {
                id: "enhancement",
                name: "Image Enhancement",
                entries: &[
                    CatalogEntry {
                        id: "contrast",
                        name: "Contrast Adjustment",
                        category: "preprocessing",
                        subcategory: Some("enhancement"),
                        description: "Adjust image contrast",
                        parameters: &[("factor", 1.5)],
                    },
                    CatalogEntry {
                        id: "histogram",
                        name: "Histogram Equalization",
                        category: "preprocessing",
                        subcategory: Some("enhancement"),
                        description: "Equalize histogram for better contrast distribution",
                        parameters: &[],
                    },
                    CatalogEntry {
                        id: "noise-removal",
                        name: "Noise Removal",
                        category: "preprocessing",
                        subcategory: Some("enhancement"),
                        description: "Remove noise using smoothing and filtering",
                        parameters: &[],
                    },
                    CatalogEntry {
                        id: "sharpening",
                        name: "Sharpening",
                        category: "preprocessing",
                        subcategory: Some("enhancement"),
                        description: "Enhance image sharpness",
                        parameters: &[],
                    },
                ],
            },
            Subcategory {
                id: "restoration",
                name: "Image Restoration",
                entries: &[
                    CatalogEntry {
                        id: "deblurring",
                        name: "Deblurring",
                        category: "preprocessing",
                        subcategory: Some("restoration"),
                        description: "Remove blur from images",
                        parameters: &[],
                    },
                    CatalogEntry {
                        id: "denoising",
                        name: "Denoising",
                        category: "preprocessing",
                        subcategory: Some("restoration"),
                        description: "Advanced noise removal",
                        parameters: &[],
                    },
                    CatalogEntry {
                        id: "inpainting",
                        name: "Inpainting",
                        category: "preprocessing",
                        subcategory: Some("restoration"),
                        description: "Fill missing parts of the image",
                        parameters: &[],
                    },
                ],
            },
        ],
        entries: &[],
    },
    Category {
        id: "color-processing",
        name: "Color Image Processing",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "color-space",
                name: "Color Space Conversion",
                category: "color-processing",
                subcategory: None,
                description: "Convert between RGB, HSV, YCbCr, etc.",
                parameters: &[],
            },
            CatalogEntry {
                id: "white-balance",
                name: "White Balancing",
                category: "color-processing",
                subcategory: None,
                description: "Adjust white balance",
                parameters: &[],
            },
            CatalogEntry {
                id: "color-correction",
                name: "Color Correction",
                category: "color-processing",
                subcategory: None,
                description: "Correct color distortions",
                parameters: &[],
            },
            CatalogEntry {
                id: "false-coloring",
                name: "False Coloring",
                category: "color-processing",
                subcategory: None,
                description: "Apply false color mapping",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "morphological",
        name: "Morphological Processing",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "dilation",
                name: "Dilation",
                category: "morphological",
                subcategory: None,
                description: "Morphological dilation operation",
                parameters: &[],
            },
            CatalogEntry {
                id: "erosion",
                name: "Erosion",
                category: "morphological",
                subcategory: None,
                description: "Morphological erosion operation",
                parameters: &[],
            },
            CatalogEntry {
                id: "opening",
                name: "Opening",
                category: "morphological",
                subcategory: None,
                description: "Morphological opening (erosion followed by dilation)",
                parameters: &[],
            },
            CatalogEntry {
                id: "closing",
                name: "Closing",
                category: "morphological",
                subcategory: None,
                description: "Morphological closing (dilation followed by erosion)",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "segmentation",
        name: "Image Segmentation",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "thresholding",
                name: "Thresholding",
                category: "segmentation",
                subcategory: None,
                description: "Binary and adaptive thresholding",
                parameters: &[],
            },
            CatalogEntry {
                id: "edge-detection",
                name: "Edge Detection",
                category: "segmentation",
                subcategory: None,
                description: "Detect edges using Canny, Sobel, etc.",
                parameters: &[],
            },
            CatalogEntry {
                id: "region-segmentation",
                name: "Region-based Segmentation",
                category: "segmentation",
                subcategory: None,
                description: "Segment image into regions",
                parameters: &[],
            },
            CatalogEntry {
                id: "clustering",
                name: "Clustering",
                category: "segmentation",
                subcategory: None,
                description: "K-means and other clustering methods",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "representation",
        name: "Representation & Description",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "boundary-representation",
                name: "Boundary Representation",
                category: "representation",
                subcategory: None,
                description: "Extract contours and boundaries",
                parameters: &[],
            },
            CatalogEntry {
                id: "region-representation",
                name: "Region Representation",
                category: "representation",
                subcategory: None,
                description: "Analyze texture and shape",
                parameters: &[],
            },
            CatalogEntry {
                id: "feature-extraction",
                name: "Feature Extraction",
                category: "representation",
                subcategory: None,
                description: "Extract key features from image",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "recognition",
        name: "Object Recognition",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "template-matching",
                name: "Template Matching",
                category: "recognition",
                subcategory: None,
                description: "Match templates in image",
                parameters: &[],
            },
            CatalogEntry {
                id: "classification",
                name: "ML Classification",
                category: "recognition",
                subcategory: None,
                description: "Machine learning-based classification",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "compression",
        name: "Image Compression",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "lossless",
                name: "Lossless Compression",
                category: "compression",
                subcategory: None,
                description: "PNG, GIF style compression",
                parameters: &[],
            },
            CatalogEntry {
                id: "lossy",
                name: "Lossy Compression",
                category: "compression",
                subcategory: None,
                description: "JPEG, WebP style compression",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "analysis",
        name: "Image Analysis",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "pattern-recognition",
                name: "Pattern Recognition",
                category: "analysis",
                subcategory: None,
                description: "Recognize patterns in image",
                parameters: &[],
            },
            CatalogEntry {
                id: "measurements",
                name: "Quantitative Measurements",
                category: "analysis",
                subcategory: None,
                description: "Measure area, perimeter, etc.",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "visualization",
        name: "Visualization",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "pseudocoloring",
                name: "Pseudocoloring",
                category: "visualization",
                subcategory: None,
                description: "Apply false color mapping",
                parameters: &[],
            },
            CatalogEntry {
                id: "3d-visualization",
                name: "3D Visualization",
                category: "visualization",
                subcategory: None,
                description: "Create 3D representations",
                parameters: &[],
            },
        ],
    },
    Category {
        id: "padding",
        name: "Image Padding Operations",
        subcategories: &[],
        entries: &[
            CatalogEntry {
                id: "zero-padding",
                name: "Zero Padding",
                category: "padding",
                subcategory: None,
                description: "Constant padding with value 0 - most common in deep learning",
                parameters: &[("paddingSize", 10.0)],
            },
            CatalogEntry {
                id: "replicate-padding",
                name: "Replicate Padding",
                category: "padding",
                subcategory: None,
                description: "Edge padding - extends edge values outward",
                parameters: &[("paddingSize", 10.0)],
            },
            CatalogEntry {
                id: "reflect-padding",
                name: "Reflect Padding",
                category: "padding",
                subcategory: None,
                description: "Mirrors image at border (excluding edge)",
                parameters: &[("paddingSize", 10.0)],
            },
            CatalogEntry {
                id: "symmetric-padding",
                name: "Symmetric Padding",
                category: "padding",
                subcategory: None,
                description: "Mirrors image including edge pixel (Reflect_101)",
                parameters: &[("paddingSize", 10.0)],
            },
            CatalogEntry {
                id: "wrap-padding",
                name: "Wrap Padding",
                category: "padding",
                subcategory: None,
                description: "Circular padding - wraps image values from opposite edge",
                parameters: &[("paddingSize", 10.0)],
            },
            CatalogEntry {
                id: "custom-padding",
                name: "Custom Padding",
                category: "padding",
                subcategory: None,
                description: "Custom value padding for specialized cases",
                parameters: &[("paddingSize", 10.0), ("customValue", PACKED_MID_GRAY)],
            },
        ],
    },
];

/// Iterate over every catalog entry in display order.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().flat_map(Category::entries)
}

/// Look up an entry by id.
pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    entries().find(|e| e.id == id)
}
