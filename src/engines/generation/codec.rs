//! Genome codec: decodes a flat genome into a structured [`TraitSet`].
//!
//! Genes are read in order through a wrapping [`GeneConsumer`], so a genome of
//! any non-zero length decodes; short genomes simply reuse their genes. The
//! decoder is pure: it never looks at population or environment state and the
//! same genome always yields a bit-identical trait set.

use crate::engines::generation::gene_consumer::GeneConsumer;
use serde::{Deserialize, Serialize};

/// Temporal easing profiles, in gene bucket order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
    Bounce,
}

impl Easing {
    pub const CATALOG: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Spring,
        Easing::Bounce,
    ];
}

/// Surface patterns for the visual extension block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Solid,
    Gradient,
    Noise,
    Stripes,
}

impl Pattern {
    pub const CATALOG: [Pattern; 4] = [
        Pattern::Solid,
        Pattern::Gradient,
        Pattern::Noise,
        Pattern::Stripes,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// 20 + g * 60
    pub size: f64,
    /// 0.5 + g * 1.5
    pub aspect_ratio: f64,
    pub corner_rounding: f64,
    pub complexity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromatics {
    /// Degrees, 0 + g * 360
    pub hue: f64,
    /// 0.3 + g * 0.7
    pub saturation: f64,
    /// 0.2 + g * 0.6
    pub lightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalProfile {
    /// 200 + g * 1800
    pub duration_ms: f64,
    pub easing: Easing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    pub adaptability: f64,
    pub intelligence: f64,
    pub exploration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    pub hover: f64,
    pub click: f64,
    pub gesture: f64,
}

/// Secondary chromatic and visual fields decoded from the extension genes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualExtension {
    pub accent_hue: f64,
    /// 0.4 + g * 0.6
    pub accent_saturation: f64,
    pub glow: f64,
    /// 0.5 + g * 0.5
    pub opacity: f64,
    pub pattern: Pattern,
}

/// Read-only view of a genome. Consumers treat every field as an opaque
/// semantic value and do their own presentation mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitSet {
    pub geometry: Geometry,
    pub chromatics: Chromatics,
    pub temporal: TemporalProfile,
    pub behavior: Behavior,
    pub sensitivity: Sensitivity,
    pub extension: VisualExtension,
}

/// Number of genes in the primary and extension blocks together
pub const ENCODED_GENES: usize = 20;

pub fn decode(genome: &[f64]) -> TraitSet {
    let mut genes = GeneConsumer::new(genome);

    let geometry = Geometry {
        size: genes.affine(20.0, 60.0),
        aspect_ratio: genes.affine(0.5, 1.5),
        corner_rounding: genes.unit(),
        complexity: genes.unit(),
    };

    let chromatics = Chromatics {
        hue: genes.affine(0.0, 360.0),
        saturation: genes.affine(0.3, 0.7),
        lightness: genes.affine(0.2, 0.6),
    };

    let temporal = TemporalProfile {
        duration_ms: genes.affine(200.0, 1800.0),
        easing: Easing::CATALOG[genes.choose(Easing::CATALOG.len())],
    };

    let behavior = Behavior {
        adaptability: genes.unit(),
        intelligence: genes.unit(),
        exploration: genes.unit(),
    };

    let sensitivity = Sensitivity {
        hover: genes.unit(),
        click: genes.unit(),
        gesture: genes.unit(),
    };

    let extension = VisualExtension {
        accent_hue: genes.affine(0.0, 360.0),
        accent_saturation: genes.affine(0.4, 0.6),
        glow: genes.unit(),
        opacity: genes.affine(0.5, 0.5),
        pattern: Pattern::CATALOG[genes.choose(Pattern::CATALOG.len())],
    };

    TraitSet {
        geometry,
        chromatics,
        temporal,
        behavior,
        sensitivity,
        extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_midpoint_genome() {
        let traits = decode(&vec![0.5; 128]);

        assert_eq!(traits.geometry.size, 50.0);
        assert_eq!(traits.geometry.aspect_ratio, 1.25);
        assert_eq!(traits.chromatics.hue, 180.0);
        assert!((traits.chromatics.saturation - 0.65).abs() < 1e-12);
        assert_eq!(traits.temporal.duration_ms, 1100.0);
        assert_eq!(traits.temporal.easing, Easing::EaseInOut);
        assert_eq!(traits.extension.opacity, 0.75);
        assert_eq!(traits.extension.pattern, Pattern::Noise);
    }

    #[test]
    fn test_decode_bounds() {
        let low = decode(&vec![0.0; 32]);
        let high = decode(&vec![1.0; 32]);

        assert_eq!(low.geometry.size, 20.0);
        assert_eq!(high.geometry.size, 80.0);
        assert_eq!(low.temporal.duration_ms, 200.0);
        assert_eq!(high.temporal.duration_ms, 2000.0);
        assert_eq!(low.temporal.easing, Easing::Linear);
        assert_eq!(high.temporal.easing, Easing::Bounce);
        assert_eq!(high.extension.pattern, Pattern::Stripes);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let genome: Vec<f64> = (0..ENCODED_GENES).map(|i| i as f64 / 23.0).collect();
        let a = decode(&genome);
        let b = decode(&genome);
        assert_eq!(a, b);
        assert_eq!(a.geometry.size.to_bits(), b.geometry.size.to_bits());
    }

    #[test]
    fn test_short_genome_wraps() {
        let genome = [0.0, 1.0];
        let traits = decode(&genome);
        // gene 4 (hue) wraps to index 0, gene 5 (saturation) to index 1
        assert_eq!(traits.chromatics.hue, 0.0);
        assert!((traits.chromatics.saturation - 1.0).abs() < 1e-12);
    }
}
