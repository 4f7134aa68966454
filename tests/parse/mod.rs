mod catalog;
mod discovery;
mod scenarios;
mod segmentation;
