use std::f32::consts::PI;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window and table (pixels, y grows downwards)
    pub const WINDOW_WIDTH: f32 = 1200.0;
    pub const WINDOW_HEIGHT: f32 = 900.0;
    pub const RIM_SIZE: f32 = 100.0;
    pub const SHADOW_OFFSET: f32 = -5.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SERVE_SPEED: f32 = 10.0;
    pub const BALL_INITIAL_SPEED_STEPS: f32 = 10.0; // in multiples of the speed increment
    pub const BALL_WALL_NOISE: f32 = 0.0125; // std-dev of the bounce angle (rad)

    // Paddle
    pub const PADDLE_WIDTH: f32 = 11.0;
    pub const PADDLE_LENGTH_FACTOR: f32 = 6.0; // length = odd(factor * width)
    pub const PADDLE_SECTORS: u32 = 15; // must be odd
    pub const PADDLE_RIM_OFFSET: f32 = 61.0;
    pub const PADDLE_TRAVEL_MARGIN: f32 = 0.075; // fraction of table height kept free
    pub const PADDLE_MOUSE_RATIO: f32 = 0.4125;
    pub const PADDLE_SECTOR_BIAS: f32 = 0.075; // rad per sector
    pub const PADDLE_RETURN_NOISE: f32 = 0.025;
    pub const PADDLE_RETURN_MARGIN: f32 = 0.01 * PI;

    // Computer opponent
    pub const COMPUTER_STEP: f32 = 9.0;
    pub const COMPUTER_JITTER: f32 = 7.0 / 15.0;
    pub const COMPUTER_HOLD_BAND: f32 = 0.4; // fraction of paddle length either side

    // Score
    pub const WIN_THRESHOLD: u32 = 10; // must be exceeded to win

    // Timing
    pub const REFRESH_RATE: u32 = 60;
    pub const NOMINAL_RATE: f32 = 60.0; // speeds are tuned for this rate
    pub const MISS_PAUSE_US: f32 = 500_000.0;
    pub const HIT_COOLDOWN_US: f32 = 333_333.3;
}
