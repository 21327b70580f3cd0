use crate::clip::AnimationClip;

/// The rig-side runtime that actually plays clips.
///
/// The controller never touches bone transforms. It only tells the host
/// which clip to start, how much each clip should contribute, and when a
/// clip's playback resources can be dropped.
pub trait BindingHost {
    /// Begins playback of `clip` from time zero.
    fn start(&mut self, clip: &AnimationClip);

    /// Applies a blend weight in `[0, 1]`.
    fn set_weight(&mut self, clip: &AnimationClip, weight: f32);

    /// Fully releases the playback resources held for `clip`.
    fn release(&mut self, clip: &AnimationClip);
}

/// Headless host: weights are only reported through `tick`.
impl BindingHost for () {
    fn start(&mut self, _clip: &AnimationClip) {}
    fn set_weight(&mut self, _clip: &AnimationClip, _weight: f32) {}
    fn release(&mut self, _clip: &AnimationClip) {}
}

impl<H: BindingHost + ?Sized> BindingHost for &mut H {
    fn start(&mut self, clip: &AnimationClip) {
        (**self).start(clip);
    }

    fn set_weight(&mut self, clip: &AnimationClip, weight: f32) {
        (**self).set_weight(clip, weight);
    }

    fn release(&mut self, clip: &AnimationClip) {
        (**self).release(clip);
    }
}

impl<H: BindingHost + ?Sized> BindingHost for Box<H> {
    fn start(&mut self, clip: &AnimationClip) {
        (**self).start(clip);
    }

    fn set_weight(&mut self, clip: &AnimationClip, weight: f32) {
        (**self).set_weight(clip, weight);
    }

    fn release(&mut self, clip: &AnimationClip) {
        (**self).release(clip);
    }
}
