use serde::{Deserialize, Serialize};

use crate::error::GraphError;

const DEFAULT_COLORS: [&str; 10] = [
    "#ff5733", "#33ff57", "#3357ff", "#ff33a1", "#a1ff33", "#33a1ff", "#ff8c33", "#8cff33",
    "#338cff", "#ff33d4",
];

/// Ordered branch colors. Sibling `i` gets color `i mod len`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors.into_iter().map(Into::into).collect::<Vec<_>>();
        if colors.is_empty() {
            return Err(GraphError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// One color per child, in child order.
    pub fn allocate<'a, S>(&'a self, children: &[S]) -> Vec<&'a str> {
        (0..children.len()).map(|index| self.color(index)).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|color| (*color).to_owned()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = GraphError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_palette_has_ten_hues() {
        let palette = Palette::default();
        assert_eq!(palette.color(0), "#ff5733");
        assert_eq!(palette.color(9), "#ff33d4");
        assert_eq!(palette.color(10), "#ff5733");
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            Palette::new(Vec::<String>::new()),
            Err(GraphError::EmptyPalette)
        ));
        assert!(serde_json::from_str::<Palette>("[]").is_err());
    }

    #[test]
    fn allocation_wraps_past_the_palette() {
        let palette = Palette::new(["red", "blue"]).unwrap();
        let colors = palette.allocate(&["b", "c", "e"]);
        assert_eq!(colors, ["red", "blue", "red"]);
    }

    proptest! {
        #[test]
        fn child_color_is_index_mod_palette(size in 1usize..12, count in 0usize..40) {
            let palette = Palette::new((0..size).map(|i| format!("#{i:06x}"))).unwrap();
            let children = (0..count).map(|i| format!("n{i}")).collect::<Vec<_>>();
            let colors = palette.allocate(&children);

            prop_assert_eq!(colors.len(), count);
            for (index, color) in colors.iter().enumerate() {
                prop_assert_eq!(*color, format!("#{:06x}", index % size));
            }
        }
    }
}
