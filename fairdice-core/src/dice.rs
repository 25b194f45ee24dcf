use crate::config::{GameConfig, FACES};
use crate::error::{FairDiceError, Result};
use std::fmt;
use std::str::FromStr;

/// A six-sided die with arbitrary integer faces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    faces: [i64; FACES],
}

impl Die {
    pub fn new(faces: [i64; FACES]) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[i64; FACES] {
        &self.faces
    }

    /// Face at `index`, wrapping around the die
    pub fn face(&self, index: usize) -> i64 {
        self.faces[index % FACES]
    }
}

impl FromStr for Die {
    type Err = FairDiceError;

    /// Parses a comma separated definition such as `2,2,4,4,9,9`
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim().parse::<i64>().map_err(|_| {
                    FairDiceError::usage(format!("'{}' in '{}' is not an integer", part.trim(), s))
                })
            })
            .collect::<Result<Vec<i64>>>()?;

        let faces: [i64; FACES] = values.try_into().map_err(|v: Vec<i64>| {
            FairDiceError::usage(format!(
                "'{}' has {} values, each die needs exactly {}",
                s,
                v.len(),
                FACES
            ))
        })?;

        Ok(Self { faces })
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", faces.join(", "))
    }
}

/// Dice supplied at startup, fixed for the whole session
#[derive(Debug, Clone)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn parse<S: AsRef<str>>(definitions: &[S], config: &GameConfig) -> Result<Self> {
        if definitions.len() < config.min_dice {
            return Err(FairDiceError::usage(format!(
                "at least {} dice are required, got {}",
                config.min_dice,
                definitions.len()
            )));
        }

        let dice = definitions
            .iter()
            .map(|d| d.as_ref().parse::<Die>())
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} dice", dice.len());
        Ok(Self { dice })
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    pub fn as_slice(&self) -> &[Die] {
        &self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_die() {
        let die: Die = "2, 2,4,4 ,9,9".parse().unwrap();
        assert_eq!(die.faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(die.to_string(), "[2, 2, 4, 4, 9, 9]");
    }

    #[test]
    fn test_parse_negative_faces() {
        let die: Die = "-1,0,1,-1,0,1".parse().unwrap();
        assert_eq!(die.face(0), -1);
        assert_eq!(die.face(7), 0);
    }

    #[test]
    fn test_reject_wrong_face_count() {
        assert!(matches!("1,2,3,4,5".parse::<Die>(), Err(FairDiceError::Usage(_))));
        assert!("1,2,3,4,5,6,7".parse::<Die>().is_err());
    }

    #[test]
    fn test_reject_non_integer_faces() {
        assert!("1,2,x,4,5,6".parse::<Die>().is_err());
        assert!("1,2,3.5,4,5,6".parse::<Die>().is_err());
        assert!("1,2,,4,5,6".parse::<Die>().is_err());
    }

    #[test]
    fn test_dice_set_requires_three_dice() {
        let config = GameConfig::default();
        let result = DiceSet::parse(&["1,2,3,4,5,6", "1,1,1,1,1,1"], &config);
        assert!(matches!(result, Err(FairDiceError::Usage(_))));
    }

    #[test]
    fn test_dice_set_parse() {
        let config = GameConfig::default();
        let set = DiceSet::parse(
            &["2,2,4,4,9,9", "6,8,1,1,8,6", "7,5,3,7,5,3"],
            &config,
        )
        .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(1).unwrap().faces(), &[6, 8, 1, 1, 8, 6]);
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_dice_set_rejects_one_bad_die() {
        let config = GameConfig::default();
        let result = DiceSet::parse(&["2,2,4,4,9,9", "6,8,1,1,8", "7,5,3,7,5,3"], &config);
        assert!(result.is_err());
    }
}
