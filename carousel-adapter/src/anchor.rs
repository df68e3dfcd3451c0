use carousel::Carousel;

/// Remembers which item was centred, by host key, so it can be centred again after the item set
/// changes (items inserted before it, reordering, filtering).
#[derive(Clone, Debug, PartialEq)]
pub struct ItemAnchor<K> {
    pub key: K,
    /// `value - theta` of the anchored item when it was captured.
    pub offset: f32,
}

/// Captures an anchor for the current nearest item.
///
/// `key_of` maps a source index (the position in the host's item sequence) to a stable key.
/// Returns `None` when there is no nearest item.
pub fn capture_nearest_anchor<K>(
    carousel: &Carousel,
    key_of: impl FnOnce(usize) -> K,
) -> Option<ItemAnchor<K>> {
    let item = carousel.nearest_item()?;
    Some(ItemAnchor {
        key: key_of(item.source_index),
        offset: carousel.value() - item.theta,
    })
}

/// Re-centres a previously captured anchor.
///
/// Run a layout pass with the new item set first: the anchor is resolved against the current
/// layout. `key_to_source_index` maps the key back to a position in the host's *current* item
/// sequence. Returns `true` when the anchor was applied.
pub fn apply_anchor<K>(
    carousel: &mut Carousel,
    anchor: &ItemAnchor<K>,
    key_to_source_index: impl FnOnce(&K) -> Option<usize>,
) -> bool {
    let Some(source_index) = key_to_source_index(&anchor.key) else {
        return false;
    };
    let Some(item) = carousel
        .items()
        .iter()
        .find(|it| it.source_index == source_index)
    else {
        return false;
    };
    let (index, target) = (item.index, item.theta + anchor.offset);
    carousel.set_value(target);
    carousel.focus_item(index).is_ok()
}
