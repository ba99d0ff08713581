//! Quote of the moment and the fixed tip list.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Quote, QUOTES, TIPS};

/// Uniform pick over the quote catalog. Drawn fresh on every render, so
/// asking for "another quote" is just rendering the page again.
pub fn random_quote<R>(rng: &mut R) -> &'static Quote
where
    R: Rng + ?Sized,
{
    QUOTES.choose(rng).unwrap_or(&QUOTES[0])
}

pub fn tips() -> &'static [&'static str] {
    TIPS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    #[test]
    fn test_quote_comes_from_catalog() {
        let mut rng = Mcg128Xsl64::seed_from_u64(3);
        for _ in 0..50 {
            let quote = random_quote(&mut rng);
            assert!(QUOTES.iter().any(|q| q.key == quote.key));
        }
    }

    #[test]
    fn test_quotes_vary_across_renders() {
        let mut rng = Mcg128Xsl64::seed_from_u64(11);
        let keys: std::collections::HashSet<_> =
            (0..100).map(|_| random_quote(&mut rng).key).collect();
        assert!(keys.len() > 1);
    }

    #[test]
    fn test_tips_keep_catalog_order() {
        assert_eq!(tips().first(), Some(&"Replace 'I'm not good at this' with 'I'm not good at this yet'"));
        assert_eq!(tips().len(), 10);
    }
}
