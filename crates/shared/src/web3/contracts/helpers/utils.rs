use alloy::json_abi::Function;
use alloy::primitives::{keccak256, Selector};
use log::debug;

/// Diamond initializers are never routed through the proxy.
pub const INIT_SIGNATURE: &str = "init(bytes)";

pub fn get_selector(fn_image: &str) -> Selector {
    Selector::from_slice(&keccak256(fn_image.as_bytes())[..4])
}

fn normalize_signature(signature: &str) -> String {
    signature.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Selectors of `functions` in declaration order, leaving out `init(bytes)`
/// and any signature listed in `excluded`.
pub fn facet_selectors(functions: &[Function], excluded: &[String]) -> Vec<Selector> {
    let excluded: Vec<String> = excluded.iter().map(|s| normalize_signature(s)).collect();

    functions
        .iter()
        .filter_map(|function| {
            let signature = function.signature();
            if signature == INIT_SIGNATURE || excluded.contains(&signature) {
                debug!("Skipping {signature}");
                None
            } else {
                Some(function.selector())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::fixed_bytes;

    #[test]
    fn test_get_selector() {
        assert_eq!(
            get_selector("transfer(address,uint256)"),
            fixed_bytes!("a9059cbb")
        );
    }

    #[test]
    fn test_facet_selectors_matches_keccak() {
        let functions = vec![
            Function::parse("function balanceOf(address account) view returns (uint256)").unwrap(),
            Function::parse("function init(bytes data)").unwrap(),
            Function::parse("function transfer(address to, uint256 amount) returns (bool)")
                .unwrap(),
        ];

        let selectors = facet_selectors(&functions, &[]);

        assert_eq!(
            selectors,
            vec![
                get_selector("balanceOf(address)"),
                get_selector("transfer(address,uint256)"),
            ]
        );
    }

    #[test]
    fn test_exclusion_ignores_whitespace() {
        let functions = vec![
            Function::parse("function transfer(address to, uint256 amount) returns (bool)")
                .unwrap(),
            Function::parse("function approve(address spender, uint256 amount) returns (bool)")
                .unwrap(),
        ];

        let selectors = facet_selectors(&functions, &["transfer(address, uint256)".to_string()]);

        assert_eq!(selectors, vec![fixed_bytes!("095ea7b3")]);
    }
}
