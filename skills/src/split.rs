//! Splitting skills into columns.

use indexmap::IndexMap;

use crate::SkillError;

/// Name of the entry padding short columns.
pub const PLACEHOLDER: &str = "";

/// Split `map` into `n` contiguous chunks in insertion order.
///
/// Chunks hold `len / n` entries each and the first `len % n` chunks take one
/// more. When sizes differ, every shorter chunk gets one placeholder entry
/// (empty name, default value) so all chunks end up the same length.
///
/// # Errors
///
/// Returns [`SkillError::InvalidArgument`] if `n` is zero or larger than the
/// number of entries.
pub fn split_evenly<V>(map: &IndexMap<String, V>, n: usize) -> Result<Vec<IndexMap<String, V>>, SkillError>
where
    V: Clone + Default,
{
    if n == 0 {
        return Err(SkillError::InvalidArgument(
            "number of columns must be at least 1".to_string(),
        ));
    }
    if n > map.len() {
        return Err(SkillError::InvalidArgument(format!(
            "cannot split {} skills into {n} columns",
            map.len()
        )));
    }

    let chunk_size = map.len() / n;
    let remainder = map.len() % n;
    let mut entries = map.iter();

    let mut chunks: Vec<IndexMap<String, V>> = (0..n)
        .map(|index| {
            let size = chunk_size + usize::from(index < remainder);
            entries
                .by_ref()
                .take(size)
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .collect();

    let longest = chunks.iter().map(IndexMap::len).max().unwrap_or(0);
    for chunk in &mut chunks {
        if chunk.len() < longest {
            chunk.insert(PLACEHOLDER.to_string(), V::default());
        }
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(count: usize) -> IndexMap<String, f64> {
        (0..count)
            .map(|i| (format!("skill-{i}"), f64::from(u32::try_from(i % 10).unwrap())))
            .collect()
    }

    #[test]
    fn test_eleven_into_three() {
        let map = levels(11);
        let chunks = split_evenly(&map, 3).unwrap();

        assert_eq!(chunks.len(), 3);
        let real_sizes: Vec<usize> = chunks
            .iter()
            .map(|chunk| chunk.keys().filter(|k| !k.is_empty()).count())
            .collect();
        assert_eq!(real_sizes, vec![4, 4, 3]);
        assert!(chunks.iter().all(|chunk| chunk.len() == 4));
        assert_eq!(chunks[2].get(PLACEHOLDER), Some(&0.0));
    }

    #[test]
    fn test_even_split_has_no_placeholder() {
        let chunks = split_evenly(&levels(6), 2).unwrap();
        assert!(chunks.iter().all(|chunk| chunk.len() == 3));
        assert!(chunks.iter().all(|chunk| !chunk.contains_key(PLACEHOLDER)));
    }

    #[test]
    fn test_concatenation_reproduces_entries() {
        for len in 1..=12 {
            for n in 1..=len {
                let map = levels(len);
                let chunks = split_evenly(&map, n).unwrap();
                assert_eq!(chunks.len(), n);

                let joined: Vec<(String, f64)> = chunks
                    .iter()
                    .flat_map(|chunk| chunk.iter())
                    .filter(|(name, _)| !name.is_empty())
                    .map(|(name, value)| (name.clone(), *value))
                    .collect();
                let original: Vec<(String, f64)> =
                    map.iter().map(|(k, v)| (k.clone(), *v)).collect();
                assert_eq!(joined, original, "len {len}, n {n}");

                let first = chunks[0].len();
                assert!(chunks.iter().all(|chunk| chunk.len() == first));
            }
        }
    }

    #[test]
    fn test_single_column() {
        let chunks = split_evenly(&levels(5), 1).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 5);
    }

    #[test]
    fn test_rejects_zero_and_too_many_columns() {
        assert!(matches!(
            split_evenly(&levels(3), 0),
            Err(SkillError::InvalidArgument(_))
        ));
        assert!(matches!(
            split_evenly(&levels(3), 4),
            Err(SkillError::InvalidArgument(_))
        ));
        assert!(matches!(
            split_evenly(&IndexMap::<String, f64>::new(), 1),
            Err(SkillError::InvalidArgument(_))
        ));
    }
}
