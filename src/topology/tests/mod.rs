
/// Dependency lookup over an explicit `(dependent, dependency)` edge list.
pub(super) fn deps_from(edges: &[(u32, u32)]) -> impl FnMut(&u32) -> Vec<u32> + '_ {
    move |&n| {
        edges
            .iter()
            .filter(|&&(src, _)| src == n)
            .map(|&(_, dst)| dst)
            .collect()
    }
}
