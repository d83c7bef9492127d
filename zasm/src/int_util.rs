use crate::parser::Rule;
use matches::debug_assert_matches;
use num::Num;
use pest::iterators::Pair;
use std::num::ParseIntError;

fn parse_num_lit<T>(pair: &Pair<Rule>, base: u32) -> Result<T, String>
where
    T: Num<FromStrRadixErr = ParseIntError>,
{
    T::from_str_radix(pair.as_str(), base)
        .map_err(|err| format!("parsing integer failed: {}", err))
}

/// Parses a `number` literal of any radix. Values are parsed unsigned and
/// wrap into `i32`, so `0xFFFFFFFF` reads as -1; negative constants are
/// written with the unary minus operator.
pub fn process_number(pair: Pair<Rule>) -> Result<i32, String> {
    debug_assert_matches!(pair.as_rule(), Rule::number);
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::hex_uint => {
            parse_num_lit::<u32>(&inner.into_inner().next().unwrap(), 16).map(|v| v as i32)
        }
        Rule::oct_uint => {
            parse_num_lit::<u32>(&inner.into_inner().next().unwrap(), 8).map(|v| v as i32)
        }
        Rule::bin_uint => {
            parse_num_lit::<u32>(&inner.into_inner().next().unwrap(), 2).map(|v| v as i32)
        }
        Rule::dec_uint => parse_num_lit::<u32>(&inner, 10).map(|v| v as i32),
        _ => unreachable!(),
    }
}
