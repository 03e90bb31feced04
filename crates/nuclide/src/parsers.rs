//! Parser combinators for nuclide identifier strings

// internal modules
use crate::nuclide::{IsomerState, Nuclide};
use nact_utils::capitalise;

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{alpha1, one_of};
use nom::combinator::{all_consuming, opt};
use nom::error::{Error, ErrorKind};
use nom::{self, Err, IResult};

/// Parse a string into a usable Nuclide as a common type
///
/// Accepted forms:
///     - Symbol first: Co60, co-60, Co_60m, Lu-177, eu152m2
///     - Mass first: 60Co, 177lu, 99mTc
///
/// Full is `<element><separator><mass><metastable>` with the separator and
/// metastable tag optional. Mass-first identifiers only carry the bare `m`
/// tag between mass and symbol.
///
/// Anything trailing makes the whole string invalid. A letter block like
/// "104mn" is always read as the element symbol (Mn-104); a metastable
/// prefix is only split off when letters remain for a full symbol after it.
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, Nuclide> {
    all_consuming(alt((symbol_first, mass_first)))(i.trim())
}

/// The `<element><separator><mass><metastable>` identifier form
fn symbol_first(i: &str) -> IResult<&str, Nuclide> {
    let (i, element) = element(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, mass) = mass_number(i)?;
    let (i, state) = metastable(i)?;

    Ok((
        i,
        Nuclide {
            symbol: capitalise(element),
            mass,
            state: state.unwrap_or_default(),
        },
    ))
}

/// The `<mass>[m]<element>` identifier form
fn mass_first(i: &str) -> IResult<&str, Nuclide> {
    let (i, mass) = mass_number(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, letters) = alpha1(i)?;
    let (state, symbol) = split_isomer_prefix(letters);

    if symbol.is_empty() || symbol.len() > 3 {
        return Err(Err::Error(Error::new(i, ErrorKind::Fail)));
    }

    Ok((
        i,
        Nuclide {
            symbol: capitalise(symbol),
            mass,
            state,
        },
    ))
}

/// Get the element symbol
fn element(i: &str) -> IResult<&str, &str> {
    let (i, element) = alpha1(i)?;

    if element.len() > 3 {
        Err(Err::Error(Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((i, element))
    }
}

/// Get the mass number, which must be at least 1
fn mass_number(i: &str) -> IResult<&str, u32> {
    let (i, mass) = nom::character::complete::u32(i)?;

    if mass == 0 {
        Err(Err::Error(Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((i, mass))
    }
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_-")(i)
}

/// Get the excited state from a range of possible formats and conventions
fn metastable(i: &str) -> IResult<&str, Option<IsomerState>> {
    opt(alt((numbered_isomer, symbol_isomer)))(i)
}

/// Get the isomer from the usual ENSDF formats m1, m2, etc...
fn numbered_isomer(i: &str) -> IResult<&str, IsomerState> {
    let (i, _) = one_of("mM")(i)?;
    let (i, number) = nom::character::complete::u8(i)?;

    if number == 0 {
        Ok((i, IsomerState::Ground))
    } else {
        Ok((i, IsomerState::Excited(number)))
    }
}

/// Get the isomer type from known FISPACT-II/common use symbols
fn symbol_isomer(i: &str) -> IResult<&str, IsomerState> {
    let (i, tag) = alpha1(i)?;
    match tag {
        "m" | "M" => Ok((i, IsomerState::Excited(1))),
        "n" | "N" => Ok((i, IsomerState::Excited(2))),
        "g" | "G" => Ok((i, IsomerState::Ground)),
        _ => Err(Err::Error(Error::new(i, ErrorKind::Fail))),
    }
}

/// Split a bare `m` prefix off a mass-first letter block
///
/// Only done when letters remain for a full symbol after the tag, so "mtc"
/// splits to (m, tc) but "mn" stays the manganese symbol.
fn split_isomer_prefix(letters: &str) -> (IsomerState, &str) {
    match letters.strip_prefix(['m', 'M']) {
        Some(rest) if letters.len() > 2 => (IsomerState::Excited(1), rest),
        _ => (IsomerState::Ground, letters),
    }
}
