use std::ops::Range;

/// Splits the row indices `[0, rows)` into `workers` contiguous bands.
///
/// Band `i` covers `[i * (rows / workers), (i + 1) * (rows / workers))`;
/// the final band extends to `rows` and absorbs the remainder, so the
/// division does not have to be exact. With more workers than rows the
/// leading bands are empty and the final band covers the whole field.
///
/// Both the step dispatch and any per-worker display attribution must go
/// through this function, so they can never disagree about which worker
/// owns a row.
pub fn row_bands(rows: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers >= 1);
    let base = rows / workers;
    (0..workers)
        .map(|i| {
            let start = i * base;
            let end = if i + 1 == workers { rows } else { (i + 1) * base };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::row_bands;

    #[test]
    fn every_row_is_owned_by_exactly_one_band() {
        for rows in [1, 2, 7, 50, 64, 101] {
            for workers in 1..=12 {
                let bands = row_bands(rows, workers);
                assert_eq!(bands.len(), workers);

                let mut owner = vec![None; rows];
                for (i, band) in bands.iter().enumerate() {
                    for row in band.clone() {
                        let previous = owner[row].replace(i);
                        assert_eq!(
                            previous, None,
                            "row {row} assigned to bands {previous:?} and {i} \
                             (rows={rows}, workers={workers})"
                        );
                    }
                }
                assert!(
                    owner.iter().all(Option::is_some),
                    "gap in partition (rows={rows}, workers={workers})"
                );
            }
        }
    }

    #[test]
    fn bands_are_contiguous_and_ordered() {
        for rows in [5, 50, 97] {
            for workers in 1..=8 {
                let bands = row_bands(rows, workers);
                assert_eq!(bands[0].start, 0);
                assert_eq!(bands[workers - 1].end, rows);
                for pair in bands.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
            }
        }
    }

    #[test]
    fn surplus_workers_get_empty_bands() {
        let bands = row_bands(3, 8);
        assert!(bands[..7].iter().all(|band| band.is_empty()));
        assert_eq!(bands[7], 0..3);
    }

    #[test]
    fn remainder_rows_go_to_the_last_band() {
        let bands = row_bands(50, 4);
        assert_eq!(bands, vec![0..12, 12..24, 24..36, 36..50]);
    }
}
