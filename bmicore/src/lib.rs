//! bmicore — calculator, history and charts for the BMI dashboard

pub mod animation;
pub mod bmi;
pub mod chart;
pub mod config;
pub mod draw;
pub mod history;
pub mod repaint;
pub mod theme;
pub mod widgets;

pub use bmi::{calculate, BmiResult, Category, InputError};
pub use config::DashConfig;
pub use history::History;
pub use repaint::RepaintController;
pub use theme::DashTheme;
