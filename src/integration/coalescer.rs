/// Coalescing decisions for the runner loop
pub struct RenderCoalescer;

impl RenderCoalescer {
    /// Any number of queued requests collapses into one frame
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, forced: bool) -> bool {
        queued_render_reqs > 0 || forced
    }

    /// Only the last size of a burst is applied, and only when it changes
    #[inline]
    pub fn decide_resize(current: Option<(u16, u16)>, requested: &[(u16, u16)]) -> Option<(u16, u16)> {
        requested
            .last()
            .copied()
            .filter(|size| current != Some(*size))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::RenderCoalescer;

    #[rstest]
    #[case(0, false, false)]
    #[case(1, false, true)]
    #[case(5, false, true)]
    #[case(0, true, true)]
    fn test_decide_render(#[case] queued: usize, #[case] forced: bool, #[case] expected: bool) {
        assert_eq!(RenderCoalescer::decide_render(queued, forced), expected);
    }

    #[rstest]
    #[case(None, &[], None)]
    #[case(None, &[(80, 24)], Some((80, 24)))]
    #[case(Some((80, 24)), &[(100, 40), (120, 50)], Some((120, 50)))]
    #[case(Some((80, 24)), &[(80, 24)], None)]
    fn test_decide_resize(
        #[case] current: Option<(u16, u16)>,
        #[case] requested: &[(u16, u16)],
        #[case] expected: Option<(u16, u16)>,
    ) {
        assert_eq!(RenderCoalescer::decide_resize(current, requested), expected);
    }
}
