use crate::domain::review::Review;

/// Aggregate figures over a (filtered) set of reviews.
///
/// Always computed from the records handed in; nothing is cached, so the
/// figures can never drift from the list they describe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewStats {
    pub count: usize,
    /// Mean rating rounded to one decimal place; `None` for an empty set
    pub average_rating: Option<f64>,
    /// Share of ratings >= 4 as a whole percentage; `None` for an empty set
    pub satisfaction_rate: Option<u32>,
}

impl ReviewStats {
    pub fn compute<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let (count, total, positive) =
            reviews
                .into_iter()
                .fold((0usize, 0u64, 0usize), |(count, total, positive), review| {
                    (
                        count + 1,
                        total + u64::from(review.rating.value()),
                        positive + usize::from(review.rating.is_positive()),
                    )
                });

        if count == 0 {
            return Self {
                count,
                average_rating: None,
                satisfaction_rate: None,
            };
        }

        let mean = total as f64 / count as f64;
        let share = positive as f64 / count as f64 * 100.0;
        Self {
            count,
            average_rating: Some((mean * 10.0).round() / 10.0),
            satisfaction_rate: Some(share.round() as u32),
        }
    }

    pub fn average_label(&self) -> String {
        self.average_rating
            .map(|average| format!("{average:.1}"))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn satisfaction_label(&self) -> String {
        self.satisfaction_rate
            .map(|rate| format!("{rate}%"))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::review::tests::review;

    fn with_ratings(ratings: &[u8]) -> Vec<Review> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, rating)| review(i as u64, "POCO X3", *rating))
            .collect()
    }

    #[test]
    fn test_empty_set_is_blank() {
        let stats = ReviewStats::compute(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.satisfaction_rate, None);
        assert_eq!(stats.average_label(), "-");
        assert_eq!(stats.satisfaction_label(), "-");
    }

    #[test]
    fn test_mostly_five_stars() {
        let reviews = with_ratings(&[5, 4, 5]);
        let stats = ReviewStats::compute(&reviews);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average_rating, Some(4.7));
        assert_eq!(stats.satisfaction_rate, Some(100));
        assert_eq!(stats.average_label(), "4.7");
        assert_eq!(stats.satisfaction_label(), "100%");
    }

    #[test]
    fn test_all_threes() {
        let reviews = with_ratings(&[3, 3]);
        let stats = ReviewStats::compute(&reviews);
        assert_eq!(stats.average_rating, Some(3.0));
        assert_eq!(stats.average_label(), "3.0");
        assert_eq!(stats.satisfaction_rate, Some(0));
    }

    #[rstest]
    #[case(&[4, 3, 3], 33)]
    #[case(&[4, 4, 3], 67)]
    #[case(&[1, 5], 50)]
    fn test_satisfaction_rounds_to_nearest(#[case] ratings: &[u8], #[case] expected: u32) {
        let reviews = with_ratings(ratings);
        assert_eq!(
            ReviewStats::compute(&reviews).satisfaction_rate,
            Some(expected)
        );
    }

    #[test]
    fn test_accepts_filtered_references() {
        let reviews = with_ratings(&[5, 1, 5]);
        let positive: Vec<&Review> = reviews.iter().filter(|r| r.rating.is_positive()).collect();
        let stats = ReviewStats::compute(positive);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average_rating, Some(5.0));
    }
}
