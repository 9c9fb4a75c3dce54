use crate::math::FloatNum;

/// define global config of the world
#[derive(Clone, Copy, Debug)]
pub struct Context {
    /// try the cheap circle reject before exact edge tests during a tick
    pub enable_rough_check: bool,
    /// slack added on top of the two bounding radii in the reject
    pub rough_check_margin: FloatNum,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            enable_rough_check: true,
            rough_check_margin: 1.,
        }
    }
}
