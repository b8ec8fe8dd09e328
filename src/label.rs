// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Overall warm/cool cast of the garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    /// Compare the weighted average red and blue channels. Either has to exceed the other by strictly more than
    /// `margin` for a warm or cool verdict.
    pub fn classify(average_red: f64, average_blue: f64, margin: f64) -> Temperature {
        if average_red > average_blue + margin {
            Temperature::Warm
        } else if average_blue > average_red + margin {
            Temperature::Cool
        } else {
            Temperature::Neutral
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Temperature::Warm => "Warm",
            Temperature::Cool => "Cool",
            Temperature::Neutral => "Neutral",
        };

        f.write_str(label)
    }
}

/// Coarse visual complexity of the garment.
///
/// Successful analyses report `Medium` unless complexity derivation is enabled, in which case the palette size
/// decides. Only the decode failure fallback reports `Simple` by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Complexity {
    Simple,
    Medium,
    High,
}

impl Complexity {
    pub fn from_palette_len(len: usize) -> Complexity {
        match len {
            0..=2 => Complexity::Simple,
            3..=4 => Complexity::Medium,
            _ => Complexity::High,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Complexity::Simple => "Simple",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        };

        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_margin_is_strict() {
        assert_eq!(Temperature::classify(111.0, 100.0, 10.0), Temperature::Warm);
        assert_eq!(Temperature::classify(110.0, 100.0, 10.0), Temperature::Neutral);
        assert_eq!(Temperature::classify(109.0, 100.0, 10.0), Temperature::Neutral);

        assert_eq!(Temperature::classify(100.0, 111.0, 10.0), Temperature::Cool);
        assert_eq!(Temperature::classify(100.0, 110.0, 10.0), Temperature::Neutral);
        assert_eq!(Temperature::classify(100.0, 109.0, 10.0), Temperature::Neutral);
    }

    #[test]
    fn test_equal_channels_are_neutral() {
        assert_eq!(Temperature::classify(0.0, 0.0, 10.0), Temperature::Neutral);
        assert_eq!(Temperature::classify(42.5, 42.5, 0.0), Temperature::Neutral);
    }

    #[test]
    fn test_complexity_from_palette_len() {
        assert_eq!(Complexity::from_palette_len(0), Complexity::Simple);
        assert_eq!(Complexity::from_palette_len(2), Complexity::Simple);
        assert_eq!(Complexity::from_palette_len(3), Complexity::Medium);
        assert_eq!(Complexity::from_palette_len(5), Complexity::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(Temperature::Cool.to_string(), "Cool");
        assert_eq!(Complexity::Medium.to_string(), "Medium");
    }
}
