use bevy::prelude::*;

/// Whether the per-frame animation (season colors and particle motion) runs.
///
/// Pausing freezes the scene as-is. The season clock keeps following
/// elapsed time, so colors jump to the current point on resume.
#[derive(Resource, Debug, Default)]
pub struct AnimationLoop {
    paused: bool,
}

impl AnimationLoop {
    pub fn is_running(&self) -> bool {
        !self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!("Animation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            info!("Animation resumed");
        }
    }

    /// Flip between running and paused. Returns whether it is now running.
    pub fn toggle(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.is_running()
    }
}

/// Run condition for the animation systems.
pub fn animation_running(animation: Res<AnimationLoop>) -> bool {
    animation.is_running()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_running() {
        assert!(AnimationLoop::default().is_running());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut animation = AnimationLoop::default();
        assert!(!animation.toggle());
        assert!(animation.toggle());
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut animation = AnimationLoop::default();
        animation.pause();
        animation.pause();
        assert!(!animation.is_running());
        animation.resume();
        assert!(animation.is_running());
    }
}
